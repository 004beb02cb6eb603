//! # Design Patterns Catalogue
//!
//! Runnable demonstrations of the classic object-oriented design patterns,
//! each expressed the way Rust would write it: traits at the seams, enums
//! for closed variant sets, explicit contexts instead of ambient globals.
//!
//! ## Behavioral
//! - Chain of Responsibility (purchase approvals)
//! - Command (restaurant orders)
//! - Memento (text editor undo/redo)
//! - Observer (news agency)
//! - State (TCP connection)
//! - Strategy (payment methods)
//! - Template (beverage preparation)
//! - Visitor (shape area and perimeter)
//!
//! ## Creational
//! - Abstract Factory (GUI widget families)
//! - Builder (custom computer)
//! - Factory (console and file loggers)
//! - Prototype (shape registry, contract documents)
//! - Singleton (database handle)
//!
//! ## Structural
//! - Adapter (media player)
//! - Bridge (remote controls and devices)
//! - Composite (file system tree)
//! - Decorator (beverage condiments)
//! - Facade (payment gateway)
//! - Flyweight (document fonts)
//! - Proxy (caching server)
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin observer
//! cargo run --bin flyweight
//! cargo run --bin catalogue   # every scenario, in category order
//! ```

pub mod behavioral;
pub mod console;
pub mod creational;
pub mod error;
pub mod structural;

pub use error::{PatternError, Result};
