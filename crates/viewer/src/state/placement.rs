//! AR placement state machine.
//!
//! ```text
//!            SessionStarted             Select (reticle known)
//!   Inert ------------------> Seeking -------------------------> Placed
//!     ^                        |  ^                                 |
//!     |       SessionEnded     |  |  ResetPlacement / Reset /       |
//!     +------------------------+  +--------- ProductChanged --------+
//!     ^                                                             |
//!     +------------------------ SessionEnded -----------------------+
//! ```
//!
//! Transitions are pure: [`PlacementState::apply`] returns the next state and
//! leaves the receiver untouched. Scale lives next to the phase and is clamped
//! to `[MIN_SCALE, MAX_SCALE]` on every write.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.0;
pub const DEFAULT_SCALE: f32 = 1.0;
/// Step of the AR +/- scale buttons
pub const SCALE_STEP: f32 = 0.1;

/// Position + orientation of a hit-test point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Decompose a hit-test transform. Any scale component is dropped.
    pub fn from_matrix(matrix: &Mat4) -> Self {
        let (_scale, orientation, position) = matrix.to_scale_rotation_translation();
        Self {
            position,
            orientation,
        }
    }

    /// From a column-major 4x4 matrix, the layout XR runtimes report.
    pub fn from_cols_array(cols: &[f32; 16]) -> Self {
        Self::from_matrix(&Mat4::from_cols_array(cols))
    }

    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }
}

/// Where the session is in the placement flow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PlacementPhase {
    /// Not in AR
    Inert,
    /// In AR, following hit-test poses with the reticle
    Seeking { reticle: Option<Pose> },
    /// In AR, model frozen at a confirmed pose
    Placed { pose: Pose },
}

/// Inputs of the placement state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementEvent {
    /// The renderer reports the XR session became immersive
    SessionStarted,
    /// The XR session stopped being immersive
    SessionEnded,
    /// Per-frame hit-test result
    HitTest(Pose),
    /// The current frame reported no surface under the viewing ray
    HitTestLost,
    /// User confirmed the reticle position
    Select,
    /// Clear the placed pose, keep the scale (AR overlay reset)
    ResetPlacement,
    /// Clear the placed pose and restore the default scale
    Reset,
    /// The active product changed; always a full reset
    ProductChanged,
    SetScale(f32),
    NudgeScale(f32),
}

/// Session placement state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementState {
    phase: PlacementPhase,
    scale: f32,
}

impl Default for PlacementState {
    fn default() -> Self {
        Self {
            phase: PlacementPhase::Inert,
            scale: DEFAULT_SCALE,
        }
    }
}

impl PlacementState {
    pub fn phase(&self) -> PlacementPhase {
        self.phase
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_immersive(&self) -> bool {
        !matches!(self.phase, PlacementPhase::Inert)
    }

    pub fn placed_pose(&self) -> Option<Pose> {
        match self.phase {
            PlacementPhase::Placed { pose } => Some(pose),
            _ => None,
        }
    }

    pub fn reticle(&self) -> Option<Pose> {
        match self.phase {
            PlacementPhase::Seeking { reticle } => reticle,
            _ => None,
        }
    }

    /// Scale as shown next to the controls, e.g. "1.3x"
    pub fn scale_label(&self) -> String {
        format!("{:.1}x", self.scale)
    }

    /// Next state after `event`.
    #[must_use]
    pub fn apply(&self, event: PlacementEvent) -> Self {
        use PlacementEvent as E;
        use PlacementPhase as P;

        let mut next = *self;
        match (self.phase, event) {
            (P::Inert, E::SessionStarted) => {
                next.phase = P::Seeking { reticle: None };
            }
            (P::Seeking { .. } | P::Placed { .. }, E::SessionEnded) => {
                next.phase = P::Inert;
            }
            (P::Seeking { .. }, E::HitTest(pose)) => {
                next.phase = P::Seeking {
                    reticle: Some(pose),
                };
            }
            (P::Seeking { .. }, E::HitTestLost) => {
                next.phase = P::Seeking { reticle: None };
            }
            (P::Seeking { reticle: Some(pose) }, E::Select) => {
                next.phase = P::Placed { pose };
            }
            (P::Placed { .. }, E::ResetPlacement) => {
                next.phase = P::Seeking { reticle: None };
            }
            (phase, E::Reset | E::ProductChanged) => {
                if let P::Placed { .. } = phase {
                    next.phase = P::Seeking { reticle: None };
                }
                next.scale = DEFAULT_SCALE;
            }
            (_, E::SetScale(requested)) => {
                next.scale = clamp_scale(requested, self.scale);
            }
            (_, E::NudgeScale(delta)) => {
                next.scale = clamp_scale(self.scale + delta, self.scale);
            }
            // Remaining pairs are no-ops: hit-tests outside Seeking, Select
            // without a reticle or after placement, repeated session events.
            _ => {}
        }
        next
    }
}

/// Clamp a requested scale into `[MIN_SCALE, MAX_SCALE]`.
/// NaN keeps `current`.
pub fn clamp_scale(requested: f32, current: f32) -> f32 {
    if requested.is_nan() {
        return current;
    }
    requested.clamp(MIN_SCALE, MAX_SCALE)
}
