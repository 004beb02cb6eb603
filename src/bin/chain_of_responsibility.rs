use design_patterns::console;
use design_patterns::behavioral::chain_of_responsibility;

fn main() {
    console::init_tracing();
    console::banner("Behavioral", "Chain of Responsibility");
    chain_of_responsibility::run_demo();
}
