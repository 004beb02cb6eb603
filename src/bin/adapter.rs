use design_patterns::console;
use design_patterns::structural::adapter;

fn main() {
    console::init_tracing();
    console::banner("Structural", "Adapter");
    adapter::run_demo();
}
