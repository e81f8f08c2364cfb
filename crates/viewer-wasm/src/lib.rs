use wasm_bindgen::prelude::*;

use ar_viewer_lib::catalog::{non_empty, CatalogError};
use ar_viewer_lib::command;
use ar_viewer_lib::shell::{Effect, ViewerShell};
use ar_viewer_lib::state::Pose;
use shared::Product;

/// Мост между JS-хостом (рендерер, WebXR) и оболочкой вьювера.
///
/// Хост сам загружает каталог и модели; сюда приходят только результаты.
/// Все ответы возвращаются JSON-строками.
#[wasm_bindgen]
pub struct WasmViewer {
    shell: ViewerShell,
}

#[wasm_bindgen]
impl WasmViewer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmViewer {
        WasmViewer {
            shell: ViewerShell::new(),
        }
    }

    /// Передаёт тело ответа `GET /api/products`, возвращает эффекты
    pub fn load_catalog(&mut self, products_json: &str) -> Result<String, JsError> {
        let result = serde_json::from_str::<Vec<Product>>(products_json)
            .map_err(|e| CatalogError::Other(format!("Invalid catalog JSON: {e}")))
            .and_then(non_empty);
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Error fetching products: {e}").into());
        }
        let effects = self.shell.apply_fetch(result);
        effects_json(&effects)
    }

    /// Запрос каталога не удался (сеть, статус)
    pub fn catalog_failed(&mut self, message: &str) {
        web_sys::console::error_1(&format!("Error fetching products: {message}").into());
        self.shell
            .apply_fetch(Err(CatalogError::Other(message.to_string())));
    }

    /// Выполняет действие (JSON), возвращает `{success, error?, data?}`
    pub fn dispatch(&mut self, action_json: &str) -> Result<String, JsError> {
        let response = match command::execute_json(&mut self.shell, action_json) {
            Ok(response) => response,
            Err(e) => command::CommandResponse::err(e),
        };
        serde_json::to_string(&response).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Поза hit-test на каждом кадре: матрица 4x4 по столбцам (16 чисел)
    pub fn hit_test(&mut self, matrix: &[f32]) -> Result<(), JsError> {
        let cols: &[f32; 16] = matrix
            .try_into()
            .map_err(|_| JsError::new(&format!("Expected 16 matrix values, got {}", matrix.len())))?;
        if cols.iter().all(|v| v.is_finite()) {
            self.shell.hit_test(Pose::from_cols_array(cols));
        }
        Ok(())
    }

    /// Текущий снимок состояния для отрисовки
    pub fn snapshot(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.shell.snapshot()).map_err(|e| JsError::new(&e.to_string()))
    }
}

impl Default for WasmViewer {
    fn default() -> Self {
        Self::new()
    }
}

fn effects_json(effects: &[Effect]) -> Result<String, JsError> {
    serde_json::to_string(effects).map_err(|e| JsError::new(&e.to_string()))
}
