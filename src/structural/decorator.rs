// Pattern: Decorator
// Condiments wrap a beverage and extend its description and cost. Decorators
// wrap other decorators just as well as plain beverages. Prices are cents.

use std::fmt;

pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> Cents;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(pub u32);

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::ops::Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

// ============================================================================
// Components
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Espresso;

impl Beverage for Espresso {
    fn description(&self) -> String {
        "Espresso".to_string()
    }

    fn cost(&self) -> Cents {
        Cents(199)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HouseBlend;

impl Beverage for HouseBlend {
    fn description(&self) -> String {
        "House Blend Coffee".to_string()
    }

    fn cost(&self) -> Cents {
        Cents(89)
    }
}

// ============================================================================
// Decorators
// ============================================================================

pub struct Milk<B: Beverage> {
    beverage: B,
}

impl<B: Beverage> Milk<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }
}

impl<B: Beverage> Beverage for Milk<B> {
    fn description(&self) -> String {
        format!("{}, Milk", self.beverage.description())
    }

    fn cost(&self) -> Cents {
        self.beverage.cost() + Cents(10)
    }
}

pub struct Mocha<B: Beverage> {
    beverage: B,
}

impl<B: Beverage> Mocha<B> {
    pub fn new(beverage: B) -> Self {
        Self { beverage }
    }
}

impl<B: Beverage> Beverage for Mocha<B> {
    fn description(&self) -> String {
        format!("{}, Mocha", self.beverage.description())
    }

    fn cost(&self) -> Cents {
        self.beverage.cost() + Cents(20)
    }
}

/// Lets decorators wrap a boxed beverage chosen at runtime.
impl Beverage for Box<dyn Beverage> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Cents {
        (**self).cost()
    }
}

fn client_code(beverage: &dyn Beverage) {
    println!("DESCRIPTION: {}", beverage.description());
    println!("COST: {}", beverage.cost());
}

pub fn run_demo() {
    println!("Client: I've got an Espresso:");
    client_code(&Espresso);
    println!();

    println!("Client: I've got a House Blend Coffee:");
    client_code(&HouseBlend);
    println!();

    println!("Client: Now I've got a Mocha Espresso:");
    client_code(&Mocha::new(Espresso));
    println!();

    println!("Client: Now I've got a Milk Mocha Espresso:");
    client_code(&Milk::new(Mocha::new(Espresso)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_beverages() {
        assert_eq!(Espresso.cost(), Cents(199));
        assert_eq!(HouseBlend.description(), "House Blend Coffee");
    }

    #[test]
    fn test_decorators_stack() {
        let drink = Milk::new(Mocha::new(Espresso));
        assert_eq!(drink.description(), "Espresso, Mocha, Milk");
        assert_eq!(drink.cost(), Cents(229));
        assert_eq!(drink.cost().to_string(), "$2.29");
    }

    #[test]
    fn test_same_condiment_twice() {
        let drink = Mocha::new(Mocha::new(HouseBlend));
        assert_eq!(drink.description(), "House Blend Coffee, Mocha, Mocha");
        assert_eq!(drink.cost(), Cents(129));
    }

    #[test]
    fn test_wrapping_runtime_choice() {
        let base: Box<dyn Beverage> = if HouseBlend.cost() < Espresso.cost() {
            Box::new(HouseBlend)
        } else {
            Box::new(Espresso)
        };
        let drink = Milk::new(base);
        assert_eq!(drink.cost().to_string(), "$0.99");
    }

    #[test]
    fn test_cents_display_pads() {
        assert_eq!(Cents(5).to_string(), "$0.05");
        assert_eq!(Cents(1000).to_string(), "$10.00");
    }
}
