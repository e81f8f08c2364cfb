//! Viewer shell: owns the viewer state and turns actions into new state plus
//! effects for the host.
//!
//! The shell is single-threaded. Background work (catalog fetch, model
//! loading, XR frames) never touches the state directly; it reports back
//! through [`ViewerShell::apply_fetch`] and [`Action`]s.

mod action;
mod snapshot;

pub use action::{Action, Effect};
pub use snapshot::{
    ControlsView, PlacementView, ProductInfo, ProductSummary, SceneView, Screen, ViewerSnapshot,
};

use shared::Product;

use crate::catalog::{CatalogError, CatalogSource};
use crate::keyboard;
use crate::state::placement::SCALE_STEP;
use crate::state::{
    CatalogPhase, FullscreenRequest, PlacementEvent, Pose, Selection, TerminalError, ViewerState,
};

#[derive(Debug, Default)]
pub struct ViewerShell {
    state: ViewerState,
    mounted: bool,
}

impl ViewerShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        ViewerSnapshot::from_state(&self.state)
    }

    pub fn current_product(&self) -> Option<&Product> {
        self.state.selection().map(Selection::current)
    }

    /// Fetch the catalog once. Later calls do nothing.
    pub async fn mount(&mut self, source: &dyn CatalogSource) -> Vec<Effect> {
        if self.mounted {
            tracing::warn!("Viewer already mounted, skipping catalog fetch");
            return Vec::new();
        }
        self.mounted = true;
        let result = source.fetch_all().await;
        self.apply_fetch(result)
    }

    /// Apply the outcome of the catalog fetch. Only the first outcome counts.
    pub fn apply_fetch(&mut self, result: Result<Vec<Product>, CatalogError>) -> Vec<Effect> {
        self.mounted = true;
        if !matches!(self.state.catalog, CatalogPhase::Loading) {
            tracing::warn!("Catalog already loaded, ignoring fetch result");
            return Vec::new();
        }

        let products = match result {
            Ok(products) => products,
            Err(e) => {
                tracing::error!("Error fetching products: {e}");
                self.state.catalog = CatalogPhase::Failed(TerminalError::from(&e));
                return Vec::new();
            }
        };

        match Selection::new(products) {
            Some(selection) => {
                tracing::info!("Catalog ready: {} products", selection.products().len());
                let effect = self.begin_model_load(&selection);
                self.state.catalog = CatalogPhase::Ready(selection);
                vec![effect]
            }
            None => {
                tracing::error!("No products found in database");
                self.state.catalog = CatalogPhase::Failed(TerminalError::EmptyCatalog);
                Vec::new()
            }
        }
    }

    /// Per-frame hit-test entry point; same as dispatching `Action::HitTest`
    /// without the matrix round trip.
    pub fn hit_test(&mut self, pose: Pose) {
        if self.state.selection().is_some() {
            self.state.placement = self.state.placement.apply(PlacementEvent::HitTest(pose));
        }
    }

    /// Apply one action and return the effects the host must perform.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let Some(selection) = self.state.selection().cloned() else {
            tracing::debug!(?action, "Catalog not ready, ignoring action");
            return Vec::new();
        };

        match action {
            Action::SelectProduct { id } => match selection.with_current(&id) {
                Some(next) => vec![self.change_product(next)],
                None => {
                    tracing::warn!("Unknown product id: {id}");
                    Vec::new()
                }
            },

            Action::Search { text } => {
                let next = selection.with_search(&text);
                self.state.chrome = self.state.chrome.with_search(text);
                if next.current().id != selection.current().id {
                    vec![self.change_product(next)]
                } else {
                    self.state.catalog = CatalogPhase::Ready(next);
                    Vec::new()
                }
            }

            Action::SessionStarted => self.placement(PlacementEvent::SessionStarted),
            Action::SessionEnded => self.placement(PlacementEvent::SessionEnded),
            Action::HitTest { matrix } => {
                if matrix.iter().all(|v| v.is_finite()) {
                    self.placement(PlacementEvent::HitTest(Pose::from_cols_array(&matrix)))
                } else {
                    tracing::debug!("Dropping non-finite hit-test matrix");
                    Vec::new()
                }
            }
            Action::HitTestLost => self.placement(PlacementEvent::HitTestLost),
            Action::Confirm => self.placement(PlacementEvent::Select),
            Action::ResetPlacement => self.placement(PlacementEvent::ResetPlacement),
            Action::ResetView => self.placement(PlacementEvent::Reset),
            Action::SetScale { value } => self.placement(PlacementEvent::SetScale(value)),
            Action::ScaleUp => self.placement(PlacementEvent::NudgeScale(SCALE_STEP)),
            Action::ScaleDown => self.placement(PlacementEvent::NudgeScale(-SCALE_STEP)),

            Action::ModelLoaded { generation } => {
                if !self.state.model.is_current(generation) {
                    tracing::debug!(
                        generation,
                        current = self.state.model.generation,
                        "Ignoring stale model load"
                    );
                }
                self.state.model = self.state.model.complete(generation);
                Vec::new()
            }

            Action::ToggleInfoPanel => {
                self.state.chrome = self.state.chrome.toggle_info_panel(true);
                Vec::new()
            }
            Action::CloseInfoPanel => {
                self.state.chrome = self.state.chrome.close_info_panel();
                Vec::new()
            }
            Action::ToggleFullscreen => {
                let (chrome, request) = self.state.chrome.toggle_fullscreen();
                self.state.chrome = chrome;
                vec![fullscreen_effect(request)]
            }
            Action::Escape => {
                let (chrome, request) = self.state.chrome.escape();
                self.state.chrome = chrome;
                request.map(fullscreen_effect).into_iter().collect()
            }
            Action::FullscreenChanged { active } => {
                self.state.chrome = self.state.chrome.with_fullscreen(active);
                Vec::new()
            }
            Action::FullscreenRejected { reason } => {
                tracing::warn!("Error attempting to enable fullscreen: {reason}");
                self.state.chrome = self.state.chrome.with_fullscreen(false);
                Vec::new()
            }

            Action::KeyPressed {
                key,
                text_input_focused,
            } => match keyboard::shortcut(&key, text_input_focused) {
                Some(action) => self.dispatch(action),
                None => Vec::new(),
            },
        }
    }

    fn placement(&mut self, event: PlacementEvent) -> Vec<Effect> {
        self.state.placement = self.state.placement.apply(event);
        Vec::new()
    }

    /// Full reset on product change: placement, scale, and a new load generation.
    fn change_product(&mut self, selection: Selection) -> Effect {
        tracing::debug!(id = %selection.current().id, "Switching product");
        self.state.placement = self.state.placement.apply(PlacementEvent::ProductChanged);
        let effect = self.begin_model_load(&selection);
        self.state.catalog = CatalogPhase::Ready(selection);
        effect
    }

    fn begin_model_load(&mut self, selection: &Selection) -> Effect {
        let product = selection.current();
        self.state.model = self.state.model.begin(product);
        Effect::LoadModel {
            generation: self.state.model.generation,
            product_id: product.id.clone(),
            model_path: product.model_path.clone(),
        }
    }
}

fn fullscreen_effect(request: FullscreenRequest) -> Effect {
    match request {
        FullscreenRequest::Enter => Effect::RequestFullscreen,
        FullscreenRequest::Exit => Effect::ExitFullscreen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{armor, duck, sample_catalog};
    use crate::state::PlacementPhase;

    fn ready(products: Vec<Product>) -> ViewerShell {
        let mut shell = ViewerShell::new();
        shell.apply_fetch(Ok(products));
        shell
    }

    const IDENTITY_AT_ORIGIN: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, -1.0, 1.0,
    ];

    #[test]
    fn test_fetch_success_selects_first_and_loads() {
        let mut shell = ViewerShell::new();
        let effects = shell.apply_fetch(Ok(vec![duck()]));
        assert_eq!(
            effects,
            vec![Effect::LoadModel {
                generation: 1,
                product_id: "1".into(),
                model_path: "/model/duck.glb".into(),
            }]
        );
        assert_eq!(shell.current_product().unwrap().name, "Duck");
        assert!(shell.state().is_loading());
    }

    #[test]
    fn test_empty_fetch_is_terminal_error() {
        let mut shell = ViewerShell::new();
        assert!(shell.apply_fetch(Ok(vec![])).is_empty());
        assert_eq!(
            shell.state().catalog,
            CatalogPhase::Failed(TerminalError::EmptyCatalog)
        );
        assert!(!shell.state().is_loading());
    }

    #[test]
    fn test_fetch_error_is_terminal() {
        let mut shell = ViewerShell::new();
        shell.apply_fetch(Err(CatalogError::Status(502)));
        assert_eq!(
            shell.state().catalog,
            CatalogPhase::Failed(TerminalError::FetchFailure)
        );
        // Nothing recovers from the error screen.
        assert!(shell
            .dispatch(Action::SelectProduct { id: "1".into() })
            .is_empty());
        shell.apply_fetch(Ok(vec![duck()]));
        assert!(shell.current_product().is_none());
    }

    #[test]
    fn test_actions_ignored_while_loading() {
        let mut shell = ViewerShell::new();
        assert!(shell.dispatch(Action::ToggleFullscreen).is_empty());
        assert!(!shell.state().chrome.fullscreen);
    }

    #[test]
    fn test_select_product_full_reset() {
        let mut shell = ready(sample_catalog());
        shell.dispatch(Action::SessionStarted);
        shell.dispatch(Action::HitTest {
            matrix: IDENTITY_AT_ORIGIN,
        });
        shell.dispatch(Action::Confirm);
        shell.dispatch(Action::SetScale { value: 1.3 });
        shell.dispatch(Action::ModelLoaded { generation: 1 });
        assert!(shell.state().placement.placed_pose().is_some());

        let effects = shell.dispatch(Action::SelectProduct { id: "3".into() });
        assert_eq!(effects.len(), 1);
        let state = shell.state();
        assert_eq!(state.placement.phase(), PlacementPhase::Seeking { reticle: None });
        assert_eq!(state.placement.scale(), 1.0);
        assert!(state.model.loading);
        assert_eq!(state.model.generation, 2);
    }

    #[test]
    fn test_reselecting_current_product_still_resets() {
        let mut shell = ready(vec![duck()]);
        shell.dispatch(Action::SetScale { value: 1.8 });
        shell.dispatch(Action::ModelLoaded { generation: 1 });

        let effects = shell.dispatch(Action::SelectProduct { id: "1".into() });
        assert_eq!(effects.len(), 1);
        assert_eq!(shell.state().placement.scale(), 1.0);
        assert!(shell.state().is_loading());
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let mut shell = ready(vec![duck()]);
        let before = shell.state().clone();
        assert!(shell
            .dispatch(Action::SelectProduct { id: "nope".into() })
            .is_empty());
        assert_eq!(shell.state(), &before);
    }

    #[test]
    fn test_search_reassigns_and_resets() {
        let mut shell = ready(vec![duck(), armor()]);
        shell.dispatch(Action::SetScale { value: 1.5 });

        let effects = shell.dispatch(Action::Search {
            text: "helmet".into(),
        });
        assert_eq!(effects.len(), 1);
        assert_eq!(shell.current_product().unwrap().id, "2");
        assert_eq!(shell.state().placement.scale(), 1.0);
        assert_eq!(shell.state().chrome.search_text, "helmet");
    }

    #[test]
    fn test_search_keeping_current_has_no_effect() {
        let mut shell = ready(vec![duck(), armor()]);
        shell.dispatch(Action::SetScale { value: 1.5 });
        let effects = shell.dispatch(Action::Search { text: "toy".into() });
        assert!(effects.is_empty());
        assert_eq!(shell.state().placement.scale(), 1.5);
        assert_eq!(shell.state().selection().unwrap().filtered_len(), 1);
    }

    #[test]
    fn test_stale_model_load_is_ignored() {
        let mut shell = ready(sample_catalog());
        shell.dispatch(Action::SelectProduct { id: "2".into() });
        shell.dispatch(Action::SelectProduct { id: "3".into() });

        shell.dispatch(Action::ModelLoaded { generation: 2 });
        assert!(shell.state().is_loading());

        shell.dispatch(Action::ModelLoaded { generation: 3 });
        assert!(!shell.state().is_loading());
    }

    #[test]
    fn test_non_finite_hit_test_dropped() {
        let mut shell = ready(vec![duck()]);
        shell.dispatch(Action::SessionStarted);
        let mut matrix = IDENTITY_AT_ORIGIN;
        matrix[12] = f32::NAN;
        shell.dispatch(Action::HitTest { matrix });
        assert!(shell.state().placement.reticle().is_none());
    }

    #[test]
    fn test_fullscreen_rejection_reverts_flag() {
        let mut shell = ready(vec![duck()]);
        let effects = shell.dispatch(Action::ToggleFullscreen);
        assert_eq!(effects, vec![Effect::RequestFullscreen]);
        assert!(shell.state().chrome.fullscreen);

        shell.dispatch(Action::FullscreenRejected {
            reason: "NotAllowedError".into(),
        });
        assert!(!shell.state().chrome.fullscreen);
    }

    #[test]
    fn test_escape_closes_panel_and_exits_fullscreen() {
        let mut shell = ready(vec![duck()]);
        shell.dispatch(Action::ToggleInfoPanel);
        shell.dispatch(Action::FullscreenChanged { active: true });

        let effects = shell.dispatch(Action::Escape);
        assert_eq!(effects, vec![Effect::ExitFullscreen]);
        assert!(!shell.state().chrome.info_panel_open);
        assert!(!shell.state().chrome.fullscreen);
    }

    #[test]
    fn test_key_pressed_routes_through_shortcuts() {
        let mut shell = ready(vec![duck()]);
        shell.dispatch(Action::KeyPressed {
            key: "I".into(),
            text_input_focused: false,
        });
        assert!(shell.state().chrome.info_panel_open);

        let effects = shell.dispatch(Action::KeyPressed {
            key: "f".into(),
            text_input_focused: true,
        });
        assert!(effects.is_empty());
        assert!(!shell.state().chrome.fullscreen);
    }

    #[test]
    fn test_hit_test_fast_path() {
        let mut shell = ready(vec![duck()]);
        let pose = Pose::from_cols_array(&IDENTITY_AT_ORIGIN);
        shell.hit_test(pose);
        assert!(shell.state().placement.reticle().is_none());

        shell.dispatch(Action::SessionStarted);
        shell.hit_test(pose);
        assert_eq!(shell.state().placement.reticle(), Some(pose));
    }
}
