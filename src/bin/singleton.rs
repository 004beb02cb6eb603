use design_patterns::console;
use design_patterns::creational::singleton;

fn main() {
    console::init_tracing();
    console::banner("Creational", "Singleton");
    singleton::run_demo();
}
