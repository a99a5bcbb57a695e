//! Puzzle state machines
//!
//! Each puzzle independently owns a [`door::DoorSlide`] wired to a
//! door it is allowed to mutate through the obstacle registry handle
//! it received at construction. Puzzles never own the registry.

pub mod color_match;
pub mod door;
pub mod room;

pub use color_match::{ColorMatchPuzzle, PuzzleState, Rgb};
pub use door::{DoorSlide, SlideState};
pub use room::RoomTrigger;
