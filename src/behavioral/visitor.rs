// Pattern: Visitor
// The shape set is closed, so it is an enum and every operation is one
// exhaustive match. Adding an operation means adding a function; adding a
// shape makes the compiler point at every operation that must handle it.

use std::f64::consts::PI;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle { radius: f64 },
    Rectangle { width: f64, height: f64 },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "Circle",
            Shape::Rectangle { .. } => "Rectangle",
        }
    }
}

pub fn area(shape: &Shape) -> f64 {
    match *shape {
        Shape::Circle { radius } => PI * radius.powi(2),
        Shape::Rectangle { width, height } => width * height,
    }
}

pub fn perimeter(shape: &Shape) -> f64 {
    match *shape {
        Shape::Circle { radius } => 2.0 * PI * radius,
        Shape::Rectangle { width, height } => 2.0 * (width + height),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Area,
    Perimeter,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Area => write!(f, "Area"),
            Operation::Perimeter => write!(f, "Perimeter"),
        }
    }
}

impl Operation {
    pub fn apply(self, shape: &Shape) -> f64 {
        match self {
            Operation::Area => area(shape),
            Operation::Perimeter => perimeter(shape),
        }
    }

    /// Circles are irrational, so they get two decimals.
    pub fn describe(self, shape: &Shape) -> String {
        let value = self.apply(shape);
        match shape {
            Shape::Circle { .. } => format!("{self} of {}: {value:.2}", shape.kind()),
            Shape::Rectangle { .. } => format!("{self} of {}: {value}", shape.kind()),
        }
    }
}

pub fn visit_all(shapes: &[Shape], operation: Operation) -> Vec<String> {
    shapes.iter().map(|shape| operation.describe(shape)).collect()
}

pub fn run_demo() {
    let shapes = [
        Shape::Circle { radius: 5.0 },
        Shape::Rectangle {
            width: 10.0,
            height: 15.0,
        },
    ];

    for operation in [Operation::Area, Operation::Perimeter] {
        println!("Calculating {operation}:");
        for line in visit_all(&shapes, operation) {
            println!("  {line}");
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_measurements() {
        let circle = Shape::Circle { radius: 5.0 };
        assert!((area(&circle) - 78.539_816).abs() < 1e-5);
        assert!((perimeter(&circle) - 31.415_926).abs() < 1e-5);
    }

    #[test]
    fn test_rectangle_measurements() {
        let rect = Shape::Rectangle {
            width: 10.0,
            height: 15.0,
        };
        assert_eq!(area(&rect), 150.0);
        assert_eq!(perimeter(&rect), 50.0);
    }

    #[test]
    fn test_descriptions() {
        let shapes = [
            Shape::Circle { radius: 5.0 },
            Shape::Rectangle {
                width: 10.0,
                height: 15.0,
            },
        ];
        assert_eq!(
            visit_all(&shapes, Operation::Area),
            vec!["Area of Circle: 78.54", "Area of Rectangle: 150"]
        );
        assert_eq!(
            visit_all(&shapes, Operation::Perimeter),
            vec!["Perimeter of Circle: 31.42", "Perimeter of Rectangle: 50"]
        );
    }
}
