use design_patterns::console;
use design_patterns::structural::proxy;

fn main() {
    console::init_tracing();
    console::banner("Structural", "Proxy");
    proxy::run_demo();
}
