use design_patterns::console;
use design_patterns::creational::abstract_factory;

fn main() {
    console::init_tracing();
    console::banner("Creational", "Abstract Factory");
    abstract_factory::run_demo();
}
