// Pattern: State
// A TCP connection whose behaviour depends on its current state. The
// transition table is a pure function of (state, event); the connection only
// applies its result.

use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

/* ============================================================
 * States, events and actions
 * ============================================================
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Closed,
    Established,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Closed => write!(f, "ClosedState"),
            ConnectionState::Established => write!(f, "EstablishedState"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Open,
    Close,
    Send(String),
    Acknowledge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Opening,
    Closing,
    Sending(String),
    AlreadyClosed,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Opening => write!(f, "Opening the connection..."),
            Action::Closing => write!(f, "Closing the connection..."),
            Action::Sending(data) => write!(f, "Sending data: {data}"),
            Action::AlreadyClosed => write!(f, "Connection is already closed."),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Cannot send data. Connection is closed.")]
    SendWhileClosed,

    #[error("Cannot acknowledge. Connection is closed.")]
    AcknowledgeWhileClosed,

    #[error("Connection is already open.")]
    AlreadyOpen,

    #[error("No pending acknowledgment. Nothing to acknowledge.")]
    NothingToAcknowledge,
}

/// The full transition table.
pub fn transition(
    state: ConnectionState,
    event: Event,
) -> Result<(ConnectionState, Action), ConnectionError> {
    use ConnectionState::{Closed, Established};

    match (state, event) {
        (Closed, Event::Open) => Ok((Established, Action::Opening)),
        (Closed, Event::Close) => Ok((Closed, Action::AlreadyClosed)),
        (Closed, Event::Send(_)) => Err(ConnectionError::SendWhileClosed),
        (Closed, Event::Acknowledge) => Err(ConnectionError::AcknowledgeWhileClosed),
        (Established, Event::Open) => Err(ConnectionError::AlreadyOpen),
        (Established, Event::Close) => Ok((Closed, Action::Closing)),
        (Established, Event::Send(data)) => Ok((Established, Action::Sending(data))),
        (Established, Event::Acknowledge) => Err(ConnectionError::NothingToAcknowledge),
    }
}

/* ============================================================
 * Context
 * ============================================================
 */

#[derive(Debug, Default)]
pub struct TcpConnection {
    state: ConnectionState,
}

impl TcpConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn handle(&mut self, event: Event) -> Result<Action, ConnectionError> {
        let (next, action) = transition(self.state, event).inspect_err(|err| {
            warn!(state = %self.state, %err, "rejected event");
        })?;

        if next != self.state {
            info!("Connection state transition: {} -> {}", self.state, next);
            self.state = next;
        }
        Ok(action)
    }

    pub fn open(&mut self) -> Result<Action, ConnectionError> {
        self.handle(Event::Open)
    }

    pub fn close(&mut self) -> Result<Action, ConnectionError> {
        self.handle(Event::Close)
    }

    pub fn send(&mut self, data: impl Into<String>) -> Result<Action, ConnectionError> {
        self.handle(Event::Send(data.into()))
    }

    pub fn acknowledge(&mut self) -> Result<Action, ConnectionError> {
        self.handle(Event::Acknowledge)
    }
}

/* ============================================================
 * Demo
 * ============================================================
 */

fn report(outcome: Result<Action, ConnectionError>) {
    match outcome {
        Ok(action) => println!("{action}"),
        Err(err) => crate::console::diagnostic(err),
    }
}

pub fn run_demo() {
    let mut connection = TcpConnection::new();

    report(connection.open());
    report(connection.send("Hello, server!"));
    report(connection.close());
    report(connection.send("This data won't be sent."));

    println!("Final state: {}", connection.state());
}

/* ============================================================
 * Tests
 * ============================================================
 */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(TcpConnection::new().state(), ConnectionState::Closed);
    }

    #[test]
    fn test_open_send_close_cycle() {
        let mut conn = TcpConnection::new();

        assert_eq!(conn.open(), Ok(Action::Opening));
        assert_eq!(conn.state(), ConnectionState::Established);

        assert_eq!(conn.send("ping"), Ok(Action::Sending("ping".into())));
        assert_eq!(conn.state(), ConnectionState::Established);

        assert_eq!(conn.close(), Ok(Action::Closing));
        assert_eq!(conn.state(), ConnectionState::Closed);
    }

    #[test]
    fn test_send_after_close_is_rejected_and_state_kept() {
        let mut conn = TcpConnection::new();
        conn.open().unwrap();
        conn.close().unwrap();

        assert_eq!(conn.send("late"), Err(ConnectionError::SendWhileClosed));
        assert_eq!(conn.state(), ConnectionState::Closed);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut conn = TcpConnection::new();
        assert_eq!(conn.close(), Ok(Action::AlreadyClosed));
        assert_eq!(conn.state(), ConnectionState::Closed);
    }

    #[test]
    fn test_illegal_events_per_state() {
        assert_eq!(
            transition(ConnectionState::Closed, Event::Acknowledge),
            Err(ConnectionError::AcknowledgeWhileClosed)
        );
        assert_eq!(
            transition(ConnectionState::Established, Event::Open),
            Err(ConnectionError::AlreadyOpen)
        );
        assert_eq!(
            transition(ConnectionState::Established, Event::Acknowledge),
            Err(ConnectionError::NothingToAcknowledge)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConnectionError::SendWhileClosed.to_string(),
            "Cannot send data. Connection is closed."
        );
        assert_eq!(Action::Sending("x".into()).to_string(), "Sending data: x");
    }

    #[test]
    fn test_state_names() {
        assert_eq!(ConnectionState::Closed.to_string(), "ClosedState");
        assert_eq!(ConnectionState::Established.to_string(), "EstablishedState");
    }
}
