//! Serializable view of the shell, for hosts that render it.

use serde::Serialize;
use shared::{Product, ProductId};

use crate::state::{CatalogPhase, PlacementPhase, Pose, ViewerState};

/// Which top-level screen to show
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Loading,
    Error { message: String },
    Viewer,
}

/// Entry of the product selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub active: bool,
}

/// Contents of the info panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductInfo {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub model_path: String,
    pub model_format: String,
    pub added_on: Option<String>,
}

impl From<&Product> for ProductInfo {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            model_path: product.model_path.clone(),
            model_format: product.model_format(),
            added_on: product.added_on(),
        }
    }
}

/// What the renderer should draw
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneView {
    /// Outside AR: model with orbit controls
    Preview { model_path: String, scale: f32 },
    /// In AR before placement: the reticle, if a surface was found
    Reticle { pose: Option<Pose> },
    /// In AR after placement: model frozen at `pose`
    Placed {
        model_path: String,
        pose: Pose,
        scale: f32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementView {
    #[serde(flatten)]
    pub phase: PlacementPhase,
    pub scale: f32,
    pub scale_label: String,
}

/// Which control group is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlsView {
    /// Scale slider, reset view, fullscreen
    pub model_controls: bool,
    /// AR +/- scale buttons
    pub ar_scale_controls: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewerSnapshot {
    #[serde(flatten)]
    pub screen: Screen,
    pub loading: bool,
    pub product_count: usize,
    pub filtered: Vec<ProductSummary>,
    pub no_results: bool,
    pub current: Option<ProductInfo>,
    pub info_panel_open: bool,
    pub fullscreen: bool,
    pub search_text: String,
    pub model_generation: u64,
    pub placement: PlacementView,
    pub scene: Option<SceneView>,
    pub controls: ControlsView,
}

impl ViewerSnapshot {
    pub fn from_state(state: &ViewerState) -> Self {
        let screen = match &state.catalog {
            CatalogPhase::Loading => Screen::Loading,
            CatalogPhase::Failed(err) => Screen::Error {
                message: err.message().to_string(),
            },
            CatalogPhase::Ready(_) => Screen::Viewer,
        };

        let selection = state.selection();
        let filtered = selection
            .map(|s| {
                s.filtered()
                    .map(|p| ProductSummary {
                        id: p.id.clone(),
                        name: p.name.clone(),
                        active: s.is_current(&p.id),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let placement = &state.placement;
        let scene = selection.map(|s| {
            let model_path = s.current().model_path.clone();
            match placement.phase() {
                PlacementPhase::Inert => SceneView::Preview {
                    model_path,
                    scale: placement.scale(),
                },
                PlacementPhase::Seeking { reticle } => SceneView::Reticle { pose: reticle },
                PlacementPhase::Placed { pose } => SceneView::Placed {
                    model_path,
                    pose,
                    scale: placement.scale(),
                },
            }
        });

        let placed = placement.placed_pose().is_some();

        Self {
            screen,
            loading: state.is_loading(),
            product_count: selection.map(|s| s.products().len()).unwrap_or(0),
            filtered,
            no_results: selection.map(|s| s.no_results()).unwrap_or(false),
            current: selection.map(|s| ProductInfo::from(s.current())),
            info_panel_open: state.chrome.info_panel_open,
            fullscreen: state.chrome.fullscreen,
            search_text: state.chrome.search_text.clone(),
            model_generation: state.model.generation,
            placement: PlacementView {
                phase: placement.phase(),
                scale: placement.scale(),
                scale_label: placement.scale_label(),
            },
            scene,
            controls: ControlsView {
                model_controls: !placed,
                ar_scale_controls: placed,
            },
        }
    }
}
