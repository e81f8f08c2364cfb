use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod validation;

pub use validation::ValidationError;

/// Уникальный идентификатор товара, назначается хранилищем
pub type ProductId = String;

/// Товар каталога в том виде, в каком его отдаёт `GET /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Путь к glTF/GLB-модели, например "/model/duck.glb"
    #[serde(rename = "modelPath")]
    pub model_path: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Формат модели по расширению пути: "GLB", "GLTF", ...
    pub fn model_format(&self) -> String {
        model_format(&self.model_path)
    }

    /// Дата добавления в виде YYYY-MM-DD
    pub fn added_on(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.date_naive().format("%Y-%m-%d").to_string())
    }

    /// Поиск по подстроке без учёта регистра (имя или описание).
    /// `needle` должен быть уже в нижнем регистре.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Формат модели по расширению файла
pub fn model_format(model_path: &str) -> String {
    let file_name = model_path.rsplit('/').next().unwrap_or(model_path);
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_uppercase(),
        _ => "UNKNOWN".to_string(),
    }
}

/// Тело запроса `POST /api/products/add`.
/// Все поля опциональны на уровне формата, проверка в [`NewProduct::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "modelPath", default, skip_serializing_if = "Option::is_none")]
    pub model_path: Option<String>,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        model_path: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            model_path: Some(model_path.into()),
        }
    }
}

/// Проверенный товар без идентификатора: только его принимает хранилище
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    #[serde(rename = "modelPath")]
    pub model_path: String,
}

impl ProductDraft {
    /// Превращает черновик в товар с идентификатором и отметками времени
    pub fn into_product(self, id: ProductId, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            model_path: self.model_path,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Ответ `GET /api/test`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResponse {
    pub message: String,
}
