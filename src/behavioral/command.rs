// Pattern: Command
// A waiter queues dish orders as command objects and hands them to the
// kitchen in one go. The chef is the receiver that knows how to cook.

use std::cell::RefCell;
use std::rc::Rc;

pub trait Command {
    fn execute(&self) -> String;
}

/// Receiver. Remembers what it cooked, in order.
#[derive(Debug, Default)]
pub struct Chef {
    prepared: RefCell<Vec<String>>,
}

impl Chef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prepare_dish(&self, dish: &str) -> String {
        self.prepared.borrow_mut().push(dish.to_string());
        format!("Chef: Preparing {dish}...")
    }

    pub fn prepared(&self) -> Vec<String> {
        self.prepared.borrow().clone()
    }
}

pub struct PrepareDishCommand {
    chef: Rc<Chef>,
    dish: String,
}

impl PrepareDishCommand {
    pub fn new(chef: &Rc<Chef>, dish: impl Into<String>) -> Self {
        Self {
            chef: Rc::clone(chef),
            dish: dish.into(),
        }
    }
}

impl Command for PrepareDishCommand {
    fn execute(&self) -> String {
        self.chef.prepare_dish(&self.dish)
    }
}

/// Invoker.
#[derive(Default)]
pub struct Waiter {
    orders: Vec<Box<dyn Command>>,
}

impl Waiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_order(&mut self, command: impl Command + 'static) {
        self.orders.push(Box::new(command));
    }

    pub fn pending(&self) -> usize {
        self.orders.len()
    }

    /// Runs every queued order in the order taken and empties the queue.
    pub fn place_orders(&mut self) -> Vec<String> {
        let mut log = vec!["Waiter: Placing orders to the kitchen...".to_string()];
        log.extend(self.orders.drain(..).map(|order| order.execute()));
        log
    }
}

pub fn run_demo() {
    let chef = Rc::new(Chef::new());
    let mut waiter = Waiter::new();

    for dish in ["Pizza", "Pasta", "Salad"] {
        waiter.take_order(PrepareDishCommand::new(&chef, dish));
    }

    for line in waiter.place_orders() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_execute_in_fifo_order() {
        let chef = Rc::new(Chef::new());
        let mut waiter = Waiter::new();
        waiter.take_order(PrepareDishCommand::new(&chef, "Pizza"));
        waiter.take_order(PrepareDishCommand::new(&chef, "Pasta"));

        let log = waiter.place_orders();

        assert_eq!(
            log,
            vec![
                "Waiter: Placing orders to the kitchen...",
                "Chef: Preparing Pizza...",
                "Chef: Preparing Pasta...",
            ]
        );
        assert_eq!(chef.prepared(), vec!["Pizza", "Pasta"]);
    }

    #[test]
    fn test_queue_is_cleared_after_placing() {
        let chef = Rc::new(Chef::new());
        let mut waiter = Waiter::new();
        waiter.take_order(PrepareDishCommand::new(&chef, "Soup"));
        assert_eq!(waiter.pending(), 1);

        waiter.place_orders();
        assert_eq!(waiter.pending(), 0);

        let second = waiter.place_orders();
        assert_eq!(second.len(), 1);
        assert_eq!(chef.prepared(), vec!["Soup"]);
    }

    #[test]
    fn test_commands_are_deferred_until_placed() {
        let chef = Rc::new(Chef::new());
        let mut waiter = Waiter::new();
        waiter.take_order(PrepareDishCommand::new(&chef, "Salad"));
        assert!(chef.prepared().is_empty());
    }
}
