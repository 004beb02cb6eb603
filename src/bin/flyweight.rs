use design_patterns::console;
use design_patterns::structural::flyweight;

fn main() {
    console::init_tracing();
    console::banner("Structural", "Flyweight");
    flyweight::run_demo();
}
