//! Blocking input producer feeding the merged event stream.

use std::sync::mpsc::Sender;
use std::thread;

use crossterm::event::{self, Event as TermEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{Command, Event};

/// Start the detached input thread.
///
/// The thread blocks on the next terminal event, maps key presses to
/// commands, and pushes them into the channel. A read failure is reported
/// as [`Event::InputFailed`] and ends the thread; the consumer treats it
/// as fatal. The thread also ends after forwarding `Quit` or when the
/// consumer has gone away.
pub fn spawn_listener(tx: Sender<Event>) {
    thread::spawn(move || loop {
        match event::read() {
            Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                if let Some(command) = map_key(key) {
                    if tx.send(Event::Command(command)).is_err() {
                        break;
                    }
                    if command == Command::Quit {
                        break;
                    }
                }
            }
            // Resize, release/repeat and other terminal events carry no
            // commands; the renderer redraws on the next event anyway.
            Ok(_) => {}
            Err(err) => {
                let _ = tx.send(Event::InputFailed(err.to_string()));
                break;
            }
        }
    });
}
