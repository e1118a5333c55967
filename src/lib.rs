pub mod app;
pub mod game;
pub mod input;
pub mod runner;
pub mod snake;
pub mod term;
pub mod vec2;

pub type TermInt = u16;

/// Outer size of the drawn frame, border included.
pub const FRAME_WIDTH: TermInt = 25;
pub const FRAME_HEIGHT: TermInt = 20;
