use design_patterns::console;
use design_patterns::behavioral::observer;

fn main() {
    console::init_tracing();
    console::banner("Behavioral", "Observer");
    observer::run_demo();
}
