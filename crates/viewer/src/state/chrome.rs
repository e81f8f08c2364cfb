//! UI chrome state: info panel, fullscreen flag, search box.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeState {
    pub info_panel_open: bool,
    /// Best knowledge of the platform fullscreen state
    pub fullscreen: bool,
    pub search_text: String,
}

/// What the host platform has to do after a fullscreen toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenRequest {
    Enter,
    Exit,
}

impl ChromeState {
    /// Toggle the info panel. Only meaningful with a current product.
    #[must_use]
    pub fn toggle_info_panel(&self, has_product: bool) -> Self {
        if !has_product {
            return self.clone();
        }
        Self {
            info_panel_open: !self.info_panel_open,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn close_info_panel(&self) -> Self {
        Self {
            info_panel_open: false,
            ..self.clone()
        }
    }

    /// Flip the fullscreen flag optimistically; the platform may still refuse.
    #[must_use]
    pub fn toggle_fullscreen(&self) -> (Self, FullscreenRequest) {
        let request = if self.fullscreen {
            FullscreenRequest::Exit
        } else {
            FullscreenRequest::Enter
        };
        let next = Self {
            fullscreen: !self.fullscreen,
            ..self.clone()
        };
        (next, request)
    }

    /// Escape: close the info panel, leave fullscreen if active.
    #[must_use]
    pub fn escape(&self) -> (Self, Option<FullscreenRequest>) {
        let request = self.fullscreen.then_some(FullscreenRequest::Exit);
        let next = Self {
            info_panel_open: false,
            fullscreen: false,
            ..self.clone()
        };
        (next, request)
    }

    /// Mirror the platform's fullscreen-change notification
    #[must_use]
    pub fn with_fullscreen(&self, active: bool) -> Self {
        Self {
            fullscreen: active,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_search(&self, text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..self.clone()
        }
    }
}
