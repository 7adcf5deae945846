use contracts::domain::a001_menu::{Catalog, CatalogError};
use gloo_net::http::Request;
use thiserror::Error;

/// Ошибка загрузки каталога; `Display` показывается пользователю у кнопки повтора
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadFailure {
    #[error("Не удалось загрузить меню: {0}")]
    Network(String),

    #[error("Не удалось загрузить меню (HTTP {0})")]
    Status(u16),

    #[error("Не удалось прочитать меню: {0}")]
    Parse(String),

    #[error("Меню заполнено с ошибкой: {0}")]
    Invalid(String),
}

impl From<CatalogError> for LoadFailure {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Malformed(inner) => LoadFailure::Parse(inner.to_string()),
            other => LoadFailure::Invalid(other.to_string()),
        }
    }
}

/// Загрузить каталог меню. Один запрос, без повторов.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, LoadFailure> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| LoadFailure::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadFailure::Status(response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| LoadFailure::Network(e.to_string()))?;

    Ok(Catalog::from_json(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_payload_maps_to_parse() {
        let err: LoadFailure = Catalog::from_json("[]").unwrap_err().into();
        assert!(matches!(err, LoadFailure::Parse(_)));
    }

    #[test]
    fn test_duplicate_ids_map_to_invalid() {
        let json = r#"{ "categories": [
            { "id": "a", "name": "A", "items": [] },
            { "id": "a", "name": "B", "items": [] }
        ] }"#;
        let err: LoadFailure = Catalog::from_json(json).unwrap_err().into();
        assert!(matches!(err, LoadFailure::Invalid(ref m) if m.contains("a")));
    }

    #[test]
    fn test_status_message() {
        assert_eq!(
            LoadFailure::Status(404).to_string(),
            "Не удалось загрузить меню (HTTP 404)"
        );
    }
}
