use design_patterns::console;
use design_patterns::structural::decorator;

fn main() {
    console::init_tracing();
    console::banner("Structural", "Decorator");
    decorator::run_demo();
}
