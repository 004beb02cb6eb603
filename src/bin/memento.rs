use design_patterns::console;
use design_patterns::behavioral::memento;

fn main() {
    console::init_tracing();
    console::banner("Behavioral", "Memento");
    memento::run_demo();
}
