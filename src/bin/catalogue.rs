// Runs every scenario in the catalogue, category by category.

use design_patterns::{behavioral, console, creational, structural, Result};

fn main() -> Result<()> {
    console::init_tracing();

    // Behavioral
    console::section("Chain of Responsibility");
    behavioral::chain_of_responsibility::run_demo();
    println!();
    console::section("Command");
    behavioral::command::run_demo();
    println!();
    console::section("Memento");
    behavioral::memento::run_demo();
    println!();
    console::section("Observer");
    behavioral::observer::run_demo();
    println!();
    console::section("State");
    behavioral::state::run_demo();
    println!();
    console::section("Strategy");
    behavioral::strategy::run_demo();
    println!();
    console::section("Template Method");
    behavioral::template::run_demo();
    println!();
    console::section("Visitor");
    behavioral::visitor::run_demo();
    println!();

    // Creational
    console::section("Abstract Factory");
    creational::abstract_factory::run_demo();
    println!();
    console::section("Builder");
    creational::builder::run_demo()?;
    println!();
    console::section("Factory");
    creational::factory::run_demo()?;
    println!();
    console::section("Prototype");
    creational::prototype::run_demo()?;
    println!();
    console::section("Singleton");
    creational::singleton::run_demo();
    println!();

    // Structural
    console::section("Adapter");
    structural::adapter::run_demo();
    println!();
    console::section("Bridge");
    structural::bridge::run_demo();
    println!();
    console::section("Composite");
    structural::composite::run_demo();
    println!();
    console::section("Decorator");
    structural::decorator::run_demo();
    println!();
    console::section("Facade");
    structural::facade::run_demo();
    println!();
    console::section("Flyweight");
    structural::flyweight::run_demo();
    println!();
    console::section("Proxy");
    structural::proxy::run_demo();
    println!();

    Ok(())
}
