//! Plumbing between the terminal and the typing loop: a channel-backed
//! event source, a tick policy, and the runner that merges both into the
//! single stream of events the loop spins on.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};

/// What the typing loop reacts to. One event is handled per step and the
/// host redraws after each.
#[derive(Clone, Debug)]
pub enum TypeEvent {
    /// A key press. Repeats and releases are filtered at the source.
    Key(KeyEvent),
    /// The terminal was resized; carries the new width the viewport must
    /// render into.
    Resize(u16),
    /// Nothing arrived within the tick interval. Keeps the header clock
    /// moving while the user thinks.
    Tick,
}

/// Where events come from. Implementations deliver key presses only; the
/// loop never has to distinguish press from repeat or release.
pub trait TypeEventSource: Send + 'static {
    /// Wait up to `timeout` for the next event.
    fn recv_timeout(&self, timeout: Duration) -> Result<TypeEvent, RecvTimeoutError>;
}

/// Reads crossterm events on a background thread and forwards the ones the
/// typing loop cares about: key presses and the width of resizes. Everything
/// else (repeats, releases, mouse, focus) is dropped here.
pub struct CrosstermEventSource {
    rx: Receiver<TypeEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let forwarded = match event::read() {
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    tx.send(TypeEvent::Key(key))
                }
                Ok(CtEvent::Resize(width, _)) => tx.send(TypeEvent::Resize(width)),
                Ok(_) => Ok(()),
                Err(_) => break,
            };
            // A send fails only once the runner is gone; stop reading then.
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TypeEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// How long a step may block before it degrades to a [`TypeEvent::Tick`].
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// The only tick policy the trainer needs: a constant interval.
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Channel-fed source for driving the loop headlessly in tests.
pub struct TestEventSource {
    rx: Receiver<TypeEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<TypeEvent>) -> Self {
        Self { rx }
    }
}

impl TypeEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TypeEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Couples an event source with a tick policy.
pub struct Runner<E: TypeEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: TypeEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// The next event, or `Tick` once the interval passes without one. A
    /// disconnected source also ticks, so a dying input thread cannot wedge
    /// the loop.
    pub fn step(&self) -> TypeEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => TypeEvent::Tick,
        }
    }
}
