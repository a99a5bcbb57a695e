//! Input management system
//!
//! Key events arrive asynchronously relative to the frame loop but
//! only toggle intent flags; the frame driver samples the flags once
//! at the start of each tick.

use serde::{Deserialize, Serialize};

/// Key codes the engine understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// D key
    D,
    /// G key
    G,
    /// R key
    R,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Four independent movement flags sampled each tick.
///
/// No combination is disallowed; opposing pairs cancel in the motion
/// integrator, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    /// Move along the horizontal facing direction
    pub forward: bool,
    /// Move against the horizontal facing direction
    pub backward: bool,
    /// Strafe left
    pub left: bool,
    /// Strafe right
    pub right: bool,
}

impl MoveIntent {
    /// Whether any movement flag is set
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Mapping from key codes to movement intent
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Key that drives `MoveIntent::forward`
    pub forward: KeyCode,
    /// Key that drives `MoveIntent::backward`
    pub backward: KeyCode,
    /// Key that drives `MoveIntent::left`
    pub left: KeyCode,
    /// Key that drives `MoveIntent::right`
    pub right: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        // WASD
        Self {
            forward: KeyCode::W,
            backward: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
        }
    }
}

/// Input manager: folds discrete key and mouse events into per-tick
/// state
pub struct InputManager {
    bindings: KeyBindings,
    intent: MoveIntent,
    mouse_delta: (f32, f32),
}

impl InputManager {
    /// Create an input manager with the given bindings
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            intent: MoveIntent::default(),
            mouse_delta: (0.0, 0.0),
        }
    }

    /// Handle a key-down or key-up event
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if key == self.bindings.forward {
            self.intent.forward = pressed;
        }
        if key == self.bindings.backward {
            self.intent.backward = pressed;
        }
        if key == self.bindings.left {
            self.intent.left = pressed;
        }
        if key == self.bindings.right {
            self.intent.right = pressed;
        }
    }

    /// Accumulate a relative mouse movement
    pub fn handle_mouse_move(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    /// Current movement intent
    pub fn intent(&self) -> MoveIntent {
        self.intent
    }

    /// Take the accumulated mouse delta, resetting it to zero
    pub fn take_mouse_delta(&mut self) -> (f32, f32) {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Clear all held state (focus loss, teardown)
    pub fn reset(&mut self) {
        self.intent = MoveIntent::default();
        self.mouse_delta = (0.0, 0.0);
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}
