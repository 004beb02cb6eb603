//! Patterns for communication and responsibility between objects.

pub mod chain_of_responsibility;
pub mod command;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template;
pub mod visitor;
