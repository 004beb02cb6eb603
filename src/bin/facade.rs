use design_patterns::console;
use design_patterns::structural::facade;

fn main() {
    console::init_tracing();
    console::banner("Structural", "Facade");
    facade::run_demo();
}
