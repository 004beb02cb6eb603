// Pattern: Facade
// One entry point hides which payment gateway handles a payment.

use crate::error::{PatternError, Result};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Default)]
pub struct PayPalGateway;

impl PayPalGateway {
    pub fn make_payment(&self, amount: u32) -> String {
        format!("Payment made using PayPal: ${amount}")
    }
}

#[derive(Debug, Default)]
pub struct StripeGateway;

impl StripeGateway {
    pub fn make_payment(&self, amount: u32) -> String {
        format!("Payment made using Stripe: ${amount}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    PayPal,
    Stripe,
}

impl FromStr for PaymentMethod {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "paypal" => Ok(PaymentMethod::PayPal),
            "stripe" => Ok(PaymentMethod::Stripe),
            other => Err(PatternError::InvalidPaymentMethod(other.to_string())),
        }
    }
}

#[derive(Debug, Default)]
pub struct PaymentGatewayFacade {
    paypal: PayPalGateway,
    stripe: StripeGateway,
}

impl PaymentGatewayFacade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pay(&self, method: PaymentMethod, amount: u32) -> String {
        match method {
            PaymentMethod::PayPal => self.paypal.make_payment(amount),
            PaymentMethod::Stripe => self.stripe.make_payment(amount),
        }
    }

    pub fn process_payment(&self, method: &str, amount: u32) -> Result<String> {
        let method = method.parse::<PaymentMethod>().inspect_err(|err| {
            warn!(%err, "payment rejected");
        })?;
        Ok(self.pay(method, amount))
    }
}

pub fn run_demo() {
    let gateway = PaymentGatewayFacade::new();
    for (method, amount) in [("paypal", 100), ("stripe", 150), ("bitcoin", 75)] {
        match gateway.process_payment(method, amount) {
            Ok(receipt) => println!("{receipt}"),
            Err(err) => crate::console::diagnostic(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paypal_and_stripe() {
        let gateway = PaymentGatewayFacade::new();
        assert_eq!(
            gateway.process_payment("paypal", 100).unwrap(),
            "Payment made using PayPal: $100"
        );
        assert_eq!(
            gateway.process_payment("stripe", 150).unwrap(),
            "Payment made using Stripe: $150"
        );
    }

    #[test]
    fn test_invalid_method_is_a_diagnostic_error() {
        let err = PaymentGatewayFacade::new()
            .process_payment("bitcoin", 10)
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid payment method: bitcoin");
    }

    #[test]
    fn test_method_names_are_exact() {
        assert!("PayPal".parse::<PaymentMethod>().is_err());
        assert_eq!("stripe".parse::<PaymentMethod>().unwrap(), PaymentMethod::Stripe);
    }
}
