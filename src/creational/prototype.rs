// Pattern: Prototype
// New objects are produced by cloning a registered template. The registry is
// an ordinary value passed to whoever needs it, not a process-wide cache.

use crate::error::{PatternError, Result};
use std::collections::HashMap;
use std::fmt::Debug;

// ============================================================================
// Example: Shape prototypes behind a trait object
// ============================================================================

pub trait ShapePrototype: Debug {
    fn clone_box(&self) -> Box<dyn ShapePrototype>;
    fn draw(&self) -> String;
}

impl Clone for Box<dyn ShapePrototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl ShapePrototype for Circle {
    fn clone_box(&self) -> Box<dyn ShapePrototype> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!("Drawing Circle with radius: {}", self.radius)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl ShapePrototype for Rectangle {
    fn clone_box(&self) -> Box<dyn ShapePrototype> {
        Box::new(self.clone())
    }

    fn draw(&self) -> String {
        format!(
            "Drawing Rectangle with width: {} and height: {}",
            self.width, self.height
        )
    }
}

#[derive(Debug, Default)]
pub struct PrototypeRegistry {
    shapes: HashMap<String, Box<dyn ShapePrototype>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with a radius-10 circle and a 10x5 rectangle.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("Circle", Box::new(Circle { radius: 10.0 }));
        registry.register(
            "Rectangle",
            Box::new(Rectangle {
                width: 10.0,
                height: 5.0,
            }),
        );
        registry
    }

    pub fn register(&mut self, key: impl Into<String>, prototype: Box<dyn ShapePrototype>) {
        self.shapes.insert(key.into(), prototype);
    }

    pub fn get(&self, key: &str) -> Result<Box<dyn ShapePrototype>> {
        self.shapes
            .get(key)
            .map(|prototype| prototype.clone_box())
            .ok_or_else(|| PatternError::UnknownPrototype(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

// ============================================================================
// Example: Document prototype with Clone
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDocument {
    content: String,
}

impl Default for ContractDocument {
    fn default() -> Self {
        Self {
            content: "Standard Contract Template".to_string(),
        }
    }
}

impl ContractDocument {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

pub fn run_demo() -> Result<()> {
    let registry = PrototypeRegistry::with_defaults();
    println!("{}", registry.get("Circle")?.draw());
    println!("{}", registry.get("Rectangle")?.draw());

    let standard = ContractDocument::default();
    let mut customized = standard.clone();
    customized.set_content("Customized Contract Content");
    println!("{}", customized.content());
    println!("Template untouched: {}", standard.content());
    Ok(())
}
