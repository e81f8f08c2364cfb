//! Closed set of inputs the viewer shell accepts, and the effects it asks the
//! host (renderer, platform) to carry out.

use serde::{Deserialize, Serialize};
use shared::ProductId;

/// An input to the viewer shell.
///
/// Every action is a no-op until the catalog has loaded. Preconditions below
/// are checked by the shell; an action whose precondition does not hold leaves
/// the state unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Make a product current. Precondition: `id` is a fetched product.
    /// Always a full reset (placement, scale, model load).
    SelectProduct { id: ProductId },
    /// Search box changed.
    Search { text: String },
    /// The renderer entered an immersive AR session.
    SessionStarted,
    /// The immersive session ended.
    SessionEnded,
    /// Per-frame hit-test pose, column-major 4x4. Only used while seeking.
    HitTest { matrix: [f32; 16] },
    /// The frame produced no hit-test result.
    HitTestLost,
    /// User confirmed placement. Precondition: seeking with a known reticle.
    Confirm,
    /// AR overlay reset: clear the placed pose, keep the scale.
    ResetPlacement,
    /// Model controls reset: clear the placed pose and reset the scale.
    ResetView,
    SetScale { value: f32 },
    ScaleUp,
    ScaleDown,
    /// The renderer finished loading the model of `generation`.
    ModelLoaded { generation: u64 },
    /// Precondition: a current product exists.
    ToggleInfoPanel,
    CloseInfoPanel,
    ToggleFullscreen,
    /// Close the info panel, leave fullscreen.
    Escape,
    /// Platform fullscreen-change notification.
    FullscreenChanged { active: bool },
    /// Platform refused a fullscreen request.
    FullscreenRejected { reason: String },
    /// Raw key press, mapped through the keyboard shortcuts.
    KeyPressed {
        key: String,
        #[serde(default)]
        text_input_focused: bool,
    },
}

/// Work the shell hands to the host after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Load the model asset and answer with `ModelLoaded { generation }`.
    LoadModel {
        generation: u64,
        product_id: ProductId,
        model_path: String,
    },
    RequestFullscreen,
    ExitFullscreen,
}
