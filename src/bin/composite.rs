use design_patterns::console;
use design_patterns::structural::composite;

fn main() {
    console::init_tracing();
    console::banner("Structural", "Composite");
    composite::run_demo();
}
