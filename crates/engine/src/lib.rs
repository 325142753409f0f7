//! Serialized game loop over a single merged event stream.
//!
//! Two detached producers feed one mpsc channel: a gravity clock and the
//! terminal input listener (see `blockfall-input`). [`run`] is the only
//! consumer and the only actor that touches game state. It blocks between
//! events, processes them strictly in arrival order, and presents a fresh
//! snapshot after each one.

use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};

use blockfall_core::{Game, GameSnapshot, ShapeSource, Step};
use blockfall_types::{Command, Event};

/// Why the loop stopped, other than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player asked to quit.
    Quit,
    /// A piece could not descend while still partly above the field.
    GameOver,
}

/// Periodic gravity signal producer.
///
/// The clock holds no game state; it only sends wake-up events. It is
/// detached and abandoned when the consumer goes away: the first failed
/// send ends the thread.
pub struct GravityClock {
    period: Duration,
}

impl GravityClock {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Start the producer thread, emitting [`Event::Gravity`] every period.
    pub fn spawn(self, tx: Sender<Event>) {
        thread::spawn(move || loop {
            thread::sleep(self.period);
            if tx.send(Event::Gravity).is_err() {
                break;
            }
        });
    }
}

/// Drain the merged event stream, driving `game` and presenting a snapshot
/// after every processed event (plus once before the first event).
///
/// Returns how the session ended. An input failure or a fully disconnected
/// channel is fatal and reported as an error, as is a render failure.
pub fn run<R, F>(game: &mut Game<R>, events: &Receiver<Event>, mut present: F) -> Result<Outcome>
where
    R: ShapeSource,
    F: FnMut(&GameSnapshot) -> Result<()>,
{
    present(&game.snapshot())?;

    for event in events.iter() {
        match event {
            Event::Command(Command::Quit) => return Ok(Outcome::Quit),
            Event::Command(command) => game.apply(command),
            Event::Gravity => {
                if game.gravity_step() == Step::GameOver {
                    present(&game.snapshot())?;
                    return Ok(Outcome::GameOver);
                }
            }
            Event::InputFailed(reason) => bail!("input source failed: {reason}"),
        }
        present(&game.snapshot())?;
    }

    bail!("event producers disconnected")
}
