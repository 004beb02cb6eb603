use design_patterns::creational::builder;
use design_patterns::{console, Result};

fn main() -> Result<()> {
    console::init_tracing();
    console::banner("Creational", "Builder");
    builder::run_demo()
}
