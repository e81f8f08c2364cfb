pub mod catalog;
pub mod chrome;
pub mod loading;
pub mod placement;
#[cfg(not(target_arch = "wasm32"))]
pub mod settings;

pub use catalog::{CatalogPhase, Selection, TerminalError};
pub use chrome::{ChromeState, FullscreenRequest};
pub use loading::ModelLoad;
pub use placement::{Pose, PlacementEvent, PlacementPhase, PlacementState};
#[cfg(not(target_arch = "wasm32"))]
pub use settings::ViewerSettings;

/// Combined viewer state: one record per concern, each with its own pure
/// transitions. Only the viewer shell replaces these records.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub catalog: CatalogPhase,
    pub placement: PlacementState,
    pub chrome: ChromeState,
    pub model: ModelLoad,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            catalog: CatalogPhase::Loading,
            placement: PlacementState::default(),
            chrome: ChromeState::default(),
            model: ModelLoad::default(),
        }
    }
}

impl ViewerState {
    pub fn selection(&self) -> Option<&Selection> {
        self.catalog.selection()
    }

    /// Loading indicator: shown while the catalog loads and while the
    /// current model has not signalled completion.
    pub fn is_loading(&self) -> bool {
        match self.catalog {
            CatalogPhase::Loading => true,
            CatalogPhase::Failed(_) => false,
            CatalogPhase::Ready(_) => self.model.loading,
        }
    }
}
