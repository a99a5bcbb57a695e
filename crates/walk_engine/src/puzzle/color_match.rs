//! Color-matching puzzle
//!
//! The player mixes a color toward a randomly generated target; when
//! every channel is within tolerance the puzzle solves (one-way) and
//! its door starts sliding open.

use crate::puzzle::door::DoorSlide;
use crate::scene::ObstacleRegistry;
use rand::Rng;

/// Per-channel absolute tolerance for a match
const MATCH_TOLERANCE: f32 = 0.05;

/// An RGB triple with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Rgb {
    /// Create a color from channel values
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Mid grey, the player's starting color
    pub fn grey() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }

    /// Generate a random color with channels rounded to 2 decimal
    /// places
    pub fn random_rounded<R: Rng>(rng: &mut R) -> Self {
        let round2 = |v: f32| (v * 100.0).round() / 100.0;
        Self::new(
            round2(rng.gen::<f32>()),
            round2(rng.gen::<f32>()),
            round2(rng.gen::<f32>()),
        )
    }

    /// Whether every channel of `other` lies strictly within `tol` of
    /// this color
    pub fn matches(&self, other: &Rgb, tol: f32) -> bool {
        (self.r - other.r).abs() < tol
            && (self.g - other.g).abs() < tol
            && (self.b - other.b).abs() < tol
    }
}

/// State of the color puzzle's one-way transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleState {
    /// Match predicate has never held
    Unsolved,
    /// Terminal state; never reset
    Solved,
}

/// The color-matching puzzle
#[derive(Debug)]
pub struct ColorMatchPuzzle {
    target: Rgb,
    player: Rgb,
    state: PuzzleState,
    door: DoorSlide,
}

impl ColorMatchPuzzle {
    /// Create a puzzle with an explicit target color
    pub fn new(target: Rgb, door: DoorSlide) -> Self {
        log::info!(
            "color puzzle target: ({:.2}, {:.2}, {:.2})",
            target.r, target.g, target.b
        );
        Self {
            target,
            player: Rgb::grey(),
            state: PuzzleState::Unsolved,
            door,
        }
    }

    /// Create a puzzle with a randomly generated target
    pub fn generate<R: Rng>(rng: &mut R, door: DoorSlide) -> Self {
        Self::new(Rgb::random_rounded(rng), door)
    }

    /// The color the player must reproduce
    pub fn target(&self) -> Rgb {
        self.target
    }

    /// The player's current color
    pub fn player_color(&self) -> Rgb {
        self.player
    }

    /// Whether the puzzle has been solved
    pub fn is_solved(&self) -> bool {
        self.state == PuzzleState::Solved
    }

    /// Update the player's color and re-check the solution
    pub fn set_player_color(&mut self, color: Rgb) {
        self.player = color;
        self.check_solution();
    }

    /// Check the match predicate.
    ///
    /// Returns `true` exactly once, on the tick the puzzle
    /// transitions to solved; the transition arms the door slide and
    /// is never undone, even if the player's color drifts away
    /// afterwards.
    pub fn check_solution(&mut self) -> bool {
        if self.state == PuzzleState::Solved {
            return false;
        }
        if self.target.matches(&self.player, MATCH_TOLERANCE) {
            self.state = PuzzleState::Solved;
            self.door.start();
            log::info!("color puzzle solved, opening door");
            return true;
        }
        false
    }

    /// Advance the door animation by one tick
    pub fn advance(&mut self, registry: &mut ObstacleRegistry) {
        self.door.advance(registry);
    }

    /// The puzzle's door animation (for inspection)
    pub fn door(&self) -> &DoorSlide {
        &self.door
    }
}
