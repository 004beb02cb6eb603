use design_patterns::console;
use design_patterns::structural::bridge;

fn main() {
    console::init_tracing();
    console::banner("Structural", "Bridge");
    bridge::run_demo();
}
