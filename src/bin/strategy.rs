use design_patterns::console;
use design_patterns::behavioral::strategy;

fn main() {
    console::init_tracing();
    console::banner("Behavioral", "Strategy");
    strategy::run_demo();
}
