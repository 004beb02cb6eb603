use design_patterns::console;
use design_patterns::behavioral::state;

fn main() {
    console::init_tracing();
    console::banner("Behavioral", "State");
    state::run_demo();
}
