use design_patterns::creational::prototype;
use design_patterns::{console, Result};

fn main() -> Result<()> {
    console::init_tracing();
    console::banner("Creational", "Prototype");
    prototype::run_demo()
}
