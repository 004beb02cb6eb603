use design_patterns::console;
use design_patterns::behavioral::command;

fn main() {
    console::init_tracing();
    console::banner("Behavioral", "Command");
    command::run_demo();
}
