// Pattern: Chain of Responsibility
// Purchase requests travel along an ordered chain of approvers. The first
// approver whose authority covers the amount approves it; when nobody does
// the chain reports that the request cannot be approved.

use std::fmt;
use tracing::debug;

// ============================================================================
// Requests and approvers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseRequest {
    pub purpose: String,
    pub amount: f64,
}

impl PurchaseRequest {
    pub fn new(purpose: impl Into<String>, amount: f64) -> Self {
        Self {
            purpose: purpose.into(),
            amount,
        }
    }
}

pub trait Approver {
    fn title(&self) -> &str;
    fn can_approve(&self, request: &PurchaseRequest) -> bool;
}

/// An approver whose authority ends at a fixed amount (inclusive).
#[derive(Debug, Clone)]
pub struct LimitedApprover {
    title: String,
    limit: f64,
}

impl LimitedApprover {
    pub fn new(title: impl Into<String>, limit: f64) -> Self {
        Self {
            title: title.into(),
            limit,
        }
    }

    pub fn department_manager() -> Self {
        Self::new("Department Manager", 1000.0)
    }

    pub fn finance_manager() -> Self {
        Self::new("Finance Manager", 5000.0)
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }
}

impl Approver for LimitedApprover {
    fn title(&self) -> &str {
        &self.title
    }

    fn can_approve(&self, request: &PurchaseRequest) -> bool {
        request.amount <= self.limit
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ceo;

impl Approver for Ceo {
    fn title(&self) -> &str {
        "CEO"
    }

    fn can_approve(&self, _request: &PurchaseRequest) -> bool {
        true
    }
}

// ============================================================================
// Chain
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Approved { by: String, purpose: String },
    Rejected { purpose: String, amount: f64 },
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approved { by, purpose } => {
                write!(f, "{by} approved the purchase of {purpose}.")
            }
            Decision::Rejected { purpose, amount } => {
                write!(f, "Request for {amount} {purpose} cannot be approved.")
            }
        }
    }
}

#[derive(Default)]
pub struct ApprovalChain {
    approvers: Vec<Box<dyn Approver>>,
}

impl ApprovalChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the next link of the chain.
    pub fn then(mut self, approver: impl Approver + 'static) -> Self {
        self.approvers.push(Box::new(approver));
        self
    }

    /// Department Manager, then Finance Manager, then the CEO.
    pub fn standard() -> Self {
        Self::new()
            .then(LimitedApprover::department_manager())
            .then(LimitedApprover::finance_manager())
            .then(Ceo)
    }

    pub fn len(&self) -> usize {
        self.approvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approvers.is_empty()
    }

    pub fn process(&self, request: &PurchaseRequest) -> Decision {
        for approver in &self.approvers {
            if approver.can_approve(request) {
                return Decision::Approved {
                    by: approver.title().to_string(),
                    purpose: request.purpose.clone(),
                };
            }
            debug!(approver = approver.title(), amount = request.amount, "passing request on");
        }
        Decision::Rejected {
            purpose: request.purpose.clone(),
            amount: request.amount,
        }
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run_demo() {
    let chain = ApprovalChain::standard();
    let requests = [
        PurchaseRequest::new("Laptops", 800.0),
        PurchaseRequest::new("Office Supplies", 3000.0),
        PurchaseRequest::new("New Furniture", 10000.0),
    ];

    for request in &requests {
        println!(
            "Processing purchase request for {} of ${}:",
            request.purpose, request.amount
        );
        println!("{}", chain.process(request));
        println!();
    }

    let without_ceo = ApprovalChain::new()
        .then(LimitedApprover::department_manager())
        .then(LimitedApprover::finance_manager());
    println!("Without a CEO at the end of the chain:");
    println!("{}", without_ceo.process(&requests[2]));
}

// ============================================================================
// Tests
// ============================================================================
