use design_patterns::console;
use design_patterns::behavioral::visitor;

fn main() {
    console::init_tracing();
    console::banner("Behavioral", "Visitor");
    visitor::run_demo();
}
