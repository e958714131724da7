//! Drag activation threshold

use serde::{Deserialize, Serialize};

/// Default pointer travel, in pixels, before a press becomes a drag
pub const DEFAULT_ACTIVATION_DISTANCE: f64 = 8.0;

/// Decides whether pointer movement starts a drag at all.
///
/// Presses that travel less than the activation distance are clicks (edit,
/// delete buttons) and never produce a drag-end event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSensor {
    pub activation_distance: f64,
}

impl DragSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance: activation_distance.max(0.0),
        }
    }

    /// True once the pointer has moved at least the activation distance
    pub fn activates(&self, dx: f64, dy: f64) -> bool {
        dx.hypot(dy) >= self.activation_distance
    }
}

impl Default for DragSensor {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVATION_DISTANCE)
    }
}
