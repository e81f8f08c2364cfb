use crate::{NewProduct, ProductDraft};

/// Ошибка проверки нового товара: список отсутствующих полей (имена как в JSON)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<String> = self
            .missing
            .iter()
            .map(|field| format!("{} is required", field))
            .collect();
        write!(f, "Product validation failed: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Поле считается отсутствующим, если его нет или оно пустое
fn required(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

impl NewProduct {
    /// Проверяет обязательные поля и возвращает черновик для хранилища
    pub fn validate(self) -> Result<ProductDraft, ValidationError> {
        let mut missing = Vec::new();
        let name = required(self.name, "name", &mut missing);
        let description = required(self.description, "description", &mut missing);
        let model_path = required(self.model_path, "modelPath", &mut missing);

        if missing.is_empty() {
            Ok(ProductDraft {
                name,
                description,
                model_path,
            })
        } else {
            Err(ValidationError { missing })
        }
    }
}
