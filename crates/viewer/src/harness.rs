//! Headless test harness for driving the viewer shell without a renderer.
//!
//! Stands in for the host: it records the model loads the shell asks for and
//! lets tests decide when (and in which order) they complete.

use shared::Product;

use crate::shell::{Action, Effect, ViewerShell, ViewerSnapshot};
use crate::state::{PlacementPhase, Pose, ViewerState};

/// A model load requested by the shell and not yet reported back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLoad {
    pub generation: u64,
    pub product_id: String,
    pub model_path: String,
}

/// Headless harness: shell plus the host-side bookkeeping of effects
#[derive(Debug, Default)]
pub struct TestHarness {
    pub shell: ViewerShell,
    pending: Vec<PendingLoad>,
    fullscreen_requests: usize,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Harness with the catalog already fetched.
    pub fn mount_with(products: Vec<Product>) -> Self {
        let mut harness = Self::new();
        let effects = harness.shell.apply_fetch(Ok(products));
        harness.record(effects);
        harness
    }

    pub fn state(&self) -> &ViewerState {
        self.shell.state()
    }

    pub fn snapshot(&self) -> ViewerSnapshot {
        self.shell.snapshot()
    }

    /// Dispatch an action and record its effects.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let effects = self.shell.dispatch(action);
        self.record(effects.clone());
        effects
    }

    fn record(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadModel {
                    generation,
                    product_id,
                    model_path,
                } => self.pending.push(PendingLoad {
                    generation,
                    product_id,
                    model_path,
                }),
                Effect::RequestFullscreen => self.fullscreen_requests += 1,
                Effect::ExitFullscreen => {}
            }
        }
    }

    // ── Model loading ─────────────────────────────────────────

    /// Loads requested so far that have not been completed, oldest first
    pub fn pending_loads(&self) -> &[PendingLoad] {
        &self.pending
    }

    /// Complete the pending load of `generation`. Returns false if none is pending.
    pub fn complete_load(&mut self, generation: u64) -> bool {
        let Some(index) = self.pending.iter().position(|p| p.generation == generation) else {
            return false;
        };
        self.pending.remove(index);
        self.dispatch(Action::ModelLoaded { generation });
        true
    }

    /// Complete the most recently requested load
    pub fn complete_latest_load(&mut self) -> bool {
        match self.pending.last() {
            Some(load) => {
                let generation = load.generation;
                self.complete_load(generation)
            }
            None => false,
        }
    }

    pub fn fullscreen_requests(&self) -> usize {
        self.fullscreen_requests
    }

    // ── Catalog ───────────────────────────────────────────────

    pub fn select(&mut self, id: &str) -> Vec<Effect> {
        self.dispatch(Action::SelectProduct { id: id.to_string() })
    }

    pub fn search(&mut self, text: &str) -> Vec<Effect> {
        self.dispatch(Action::Search {
            text: text.to_string(),
        })
    }

    pub fn current_name(&self) -> Option<&str> {
        self.shell.current_product().map(|p| p.name.as_str())
    }

    // ── AR session ────────────────────────────────────────────

    pub fn enter_ar(&mut self) {
        self.dispatch(Action::SessionStarted);
    }

    pub fn exit_ar(&mut self) {
        self.dispatch(Action::SessionEnded);
    }

    /// Report a surface hit with identity orientation at `(x, y, z)`
    pub fn hit_test_at(&mut self, x: f32, y: f32, z: f32) {
        let mut matrix = glam::Mat4::IDENTITY.to_cols_array();
        matrix[12] = x;
        matrix[13] = y;
        matrix[14] = z;
        self.dispatch(Action::HitTest { matrix });
    }

    pub fn confirm(&mut self) {
        self.dispatch(Action::Confirm);
    }

    pub fn phase(&self) -> PlacementPhase {
        self.state().placement.phase()
    }

    pub fn placed_pose(&self) -> Option<Pose> {
        self.state().placement.placed_pose()
    }

    pub fn scale(&self) -> f32 {
        self.state().placement.scale()
    }

    /// Enter AR, find a surface and place the model there
    pub fn place_at(&mut self, x: f32, y: f32, z: f32) {
        if !self.state().placement.is_immersive() {
            self.enter_ar();
        }
        self.hit_test_at(x, y, z);
        self.confirm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{duck, sample_catalog};

    #[test]
    fn test_mount_records_initial_load() {
        let h = TestHarness::mount_with(sample_catalog());
        assert_eq!(h.pending_loads().len(), 1);
        assert_eq!(h.pending_loads()[0].product_id, "1");
        assert_eq!(h.current_name(), Some("Nissan GTR"));
    }

    #[test]
    fn test_complete_latest_load_clears_spinner() {
        let mut h = TestHarness::mount_with(vec![duck()]);
        assert!(h.state().is_loading());
        assert!(h.complete_latest_load());
        assert!(!h.state().is_loading());
        assert!(h.pending_loads().is_empty());
        assert!(!h.complete_latest_load());
    }

    #[test]
    fn test_out_of_order_completion() {
        let mut h = TestHarness::mount_with(sample_catalog());
        h.select("3");
        h.select("6");
        assert_eq!(h.pending_loads().len(), 3);

        // Newest finishes first, then a stale one.
        assert!(h.complete_load(3));
        assert!(!h.state().is_loading());
        assert!(h.complete_load(2));
        assert!(!h.state().is_loading());
        assert!(!h.complete_load(42));
    }

    #[test]
    fn test_place_at_freezes_pose() {
        let mut h = TestHarness::mount_with(vec![duck()]);
        h.place_at(0.5, 0.0, -1.0);
        let pose = h.placed_pose().unwrap();
        assert_eq!(pose.position, glam::Vec3::new(0.5, 0.0, -1.0));

        h.hit_test_at(2.0, 0.0, 0.0);
        assert_eq!(h.placed_pose(), Some(pose));
    }

    #[test]
    fn test_fullscreen_requests_counted() {
        let mut h = TestHarness::mount_with(vec![duck()]);
        h.dispatch(Action::ToggleFullscreen);
        h.dispatch(Action::ToggleFullscreen);
        assert_eq!(h.fullscreen_requests(), 1);
        assert!(!h.state().chrome.fullscreen);
    }
}
