use design_patterns::console;
use design_patterns::behavioral::template;

fn main() {
    console::init_tracing();
    console::banner("Behavioral", "Template Method");
    template::run_demo();
}
