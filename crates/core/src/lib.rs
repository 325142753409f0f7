//! Core game rules - pure, deterministic, and testable.
//!
//! This crate contains the whole rule engine of the game and has zero
//! dependencies on terminals, threads, or I/O:
//!
//! - [`catalog`]: static shape/angle/offset tables
//! - [`field`]: the 10x20 playfield with line clearing
//! - [`piece`]: the falling piece with collision-checked movement
//! - [`game`]: the spawn/fall/lock/game-over lifecycle
//! - [`rng`]: injectable shape source (uniform LCG or a scripted sequence)
//! - [`snapshot`]: read-only redraw state for renderers
//!
//! # Game rules
//!
//! This is the classic minimal rule set, not a modern guideline game:
//! each shape rotates through its own fixed cycle of up to four
//! orientations with no wall kicks, shapes are drawn uniformly at random
//! (no bag), and a hard drop only rests the piece - locking always waits
//! for the next gravity step.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Game, ScriptedShapes, Step};
//! use blockfall_types::{Command, Shape};
//!
//! let mut game = Game::new(ScriptedShapes::new(vec![Shape::O, Shape::T]));
//! game.apply(Command::MoveLeft);
//! game.apply(Command::HardDrop);
//!
//! // The next gravity step finds the piece resting and locks it.
//! assert_eq!(game.gravity_step(), Step::Locked { cleared: 0 });
//! assert_eq!(game.piece.shape(), Shape::T);
//! ```

pub mod catalog;
pub mod field;
pub mod game;
pub mod piece;
pub mod rng;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used items for convenience
pub use catalog::{angle_cycle, offsets, CellOffsets, Offset};
pub use field::Field;
pub use game::{Game, Step};
pub use piece::Piece;
pub use rng::{ScriptedShapes, ShapeSource, SimpleRng, UniformShapes};
pub use snapshot::{ActiveView, GameSnapshot};
