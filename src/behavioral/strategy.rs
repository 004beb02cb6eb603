// Pattern: Strategy
// A payment context delegates the actual payment to a swappable strategy.

use tracing::info;

// ============================================================================
// Strategies
// ============================================================================

pub trait PaymentStrategy {
    fn name(&self) -> &str;
    fn pay(&self, amount: u32) -> String;
}

#[derive(Debug, Clone)]
pub struct CreditCardStrategy {
    card_number: String,
    #[allow(dead_code)]
    expiry_date: String,
    #[allow(dead_code)]
    cvv: String,
}

impl CreditCardStrategy {
    pub fn new(
        card_number: impl Into<String>,
        expiry_date: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            card_number: card_number.into(),
            expiry_date: expiry_date.into(),
            cvv: cvv.into(),
        }
    }
}

impl PaymentStrategy for CreditCardStrategy {
    fn name(&self) -> &str {
        "Credit Card"
    }

    fn pay(&self, amount: u32) -> String {
        format!(
            "CreditCardStrategy: Paying {amount} via credit card ({})...",
            self.card_number
        )
    }
}

#[derive(Debug, Clone)]
pub struct PayPalStrategy {
    email: String,
    #[allow(dead_code)]
    password: String,
}

impl PayPalStrategy {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl PaymentStrategy for PayPalStrategy {
    fn name(&self) -> &str {
        "PayPal"
    }

    fn pay(&self, amount: u32) -> String {
        format!("PayPalStrategy: Paying {amount} via PayPal ({})...", self.email)
    }
}

// ============================================================================
// Context
// ============================================================================

pub struct PaymentContext {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    pub fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn make_payment(&self, amount: u32) -> String {
        info!(strategy = self.strategy.name(), amount, "PaymentContext: Initiating payment process...");
        self.strategy.pay(amount)
    }
}

pub fn run_demo() {
    let mut context = PaymentContext::new(Box::new(CreditCardStrategy::new(
        "1234 5678 9012 3456",
        "12/25",
        "123",
    )));
    println!("Client: Payment strategy is set to {}.", context.strategy_name());
    println!("{}", context.make_payment(100));
    println!();

    context.set_payment_strategy(Box::new(PayPalStrategy::new(
        "example@example.com",
        "password",
    )));
    println!("Client: Changing payment strategy to {}.", context.strategy_name());
    println!("{}", context.make_payment(200));
}
