// Pattern: Observer
// A news agency pushes every news item to its subscribers, in the order they
// subscribed. A failing subscriber never blocks delivery to the others.

use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, warn};

// ============================================================================
// Subscribers
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{subscriber} could not take delivery: {reason}")]
pub struct DeliveryError {
    pub subscriber: String,
    pub reason: String,
}

impl DeliveryError {
    pub fn new(subscriber: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            subscriber: subscriber.into(),
            reason: reason.into(),
        }
    }
}

pub trait Subscriber {
    fn name(&self) -> &str;
    fn update(&self, news: &str) -> Result<(), DeliveryError>;
}

pub type SharedSubscriber = Rc<dyn Subscriber>;

/// Prints every news item it receives.
pub struct ConsoleSubscriber {
    name: String,
}

impl ConsoleSubscriber {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn shared(name: impl Into<String>) -> SharedSubscriber {
        Rc::new(Self::new(name))
    }
}

impl Subscriber for ConsoleSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&self, news: &str) -> Result<(), DeliveryError> {
        println!("{}: Received news - \"{}\"", self.name, news);
        Ok(())
    }
}

// ============================================================================
// Subject
// ============================================================================

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failures: Vec<DeliveryError>,
}

impl DeliveryReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Default)]
pub struct NewsAgency {
    news: String,
    subscribers: Vec<SharedSubscriber>,
}

impl NewsAgency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn news(&self) -> &str {
        &self.news
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn position(&self, subscriber: &SharedSubscriber) -> Option<usize> {
        self.subscribers
            .iter()
            .position(|existing| Rc::ptr_eq(existing, subscriber))
    }

    /// Returns `false` when the subscriber was already attached.
    pub fn attach(&mut self, subscriber: SharedSubscriber) -> bool {
        if self.position(&subscriber).is_some() {
            debug!(subscriber = subscriber.name(), "already attached, ignoring");
            return false;
        }
        info!(subscriber = subscriber.name(), "NewsAgency: Subscriber attached.");
        self.subscribers.push(subscriber);
        true
    }

    /// Returns `false` when the subscriber was not attached.
    pub fn detach(&mut self, subscriber: &SharedSubscriber) -> bool {
        match self.position(subscriber) {
            Some(index) => {
                self.subscribers.remove(index);
                info!(subscriber = subscriber.name(), "NewsAgency: Subscriber detached.");
                true
            }
            None => false,
        }
    }

    pub fn notify_subscribers(&self) -> DeliveryReport {
        info!(count = self.subscribers.len(), "NewsAgency: Notifying subscribers.");
        let mut report = DeliveryReport::default();
        for subscriber in &self.subscribers {
            match subscriber.update(&self.news) {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    warn!(%err, "delivery failed, continuing with remaining subscribers");
                    report.failures.push(err);
                }
            }
        }
        report
    }

    pub fn add_news(&mut self, news: impl Into<String>) -> DeliveryReport {
        self.news = news.into();
        info!("NewsAgency: News added.");
        self.notify_subscribers()
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run_demo() {
    let mut agency = NewsAgency::new();
    let subscriber_a = ConsoleSubscriber::shared("SubscriberA");
    let subscriber_b = ConsoleSubscriber::shared("SubscriberB");

    agency.attach(Rc::clone(&subscriber_a));
    agency.attach(Rc::clone(&subscriber_b));

    agency.add_news("Breaking news: COVID-19 vaccine approved!");
    agency.add_news("Weather forecast: Sunny with a chance of rain.");

    agency.detach(&subscriber_b);

    agency.add_news("Traffic update: Heavy traffic on the highways.");
}

// ============================================================================
// Tests
// ============================================================================
