//! Shared vocabulary types for the whole workspace.
//! This crate contains pure data types with no external dependencies.

/// Field dimensions.
pub const FIELD_WIDTH: u8 = 10;
pub const FIELD_HEIGHT: u8 = 20;

/// Spawn anchor for new pieces, near top-center.
pub const SPAWN_X: i8 = 4;
pub const SPAWN_Y: i8 = 0;

/// Gravity period in milliseconds. Fixed for the whole game.
pub const GRAVITY_INTERVAL_MS: u64 = 1000;

/// The seven piece shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    O,
    Z,
    S,
    I,
    T,
    L,
    J,
}

impl Shape {
    /// All shapes, in catalog order.
    pub const ALL: [Shape; 7] = [
        Shape::O,
        Shape::Z,
        Shape::S,
        Shape::I,
        Shape::T,
        Shape::L,
        Shape::J,
    ];
}

/// Discrete piece orientations, named after analog clock positions.
///
/// Not every shape supports all four; see the catalog for the cyclic
/// subset each shape rotates through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Angle {
    Clock12,
    Clock3,
    Clock6,
    Clock9,
}

/// Player commands, as produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
    HardDrop,
    /// Moves the piece up one row. Debug aid with no game meaning.
    DebugUp,
    Quit,
}

/// One entry in the merged event stream consumed by the game loop.
///
/// Two producers feed this stream: a gravity clock and a blocking input
/// listener. The consumer processes entries strictly in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Periodic gravity signal.
    Gravity,
    /// A player command.
    Command(Command),
    /// The input source failed; fatal for the game loop.
    InputFailed(String),
}

/// One field cell: empty, or filled by a locked piece of the given shape.
/// The shape tag is opaque to the core; the renderer maps it to a style.
pub type Cell = Option<Shape>;
