use design_patterns::creational::factory;
use design_patterns::{console, Result};

fn main() -> Result<()> {
    console::init_tracing();
    console::banner("Creational", "Factory");
    factory::run_demo()
}
