use super::selection::Selection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Ошибки разбора и проверки каталога меню
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Некорректный формат меню: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Категория №{0} не имеет идентификатора")]
    EmptyCategoryId(usize),

    #[error("Идентификатор категории повторяется: {0}")]
    DuplicateCategoryId(String),

    #[error("Идентификатор категории \"{0}\" зарезервирован")]
    ReservedCategoryId(String),
}

// ============================================================================
// Aggregate
// ============================================================================

/// Блюдо внутри категории. Идентификатора нет: блюдо определяется позицией.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,

    /// Имя файла относительно каталога изображений
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub popular: bool,
}

/// Категория меню. Порядок блюд = порядок отображения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub items: Vec<Dish>,
}

/// Каталог меню, загружается один раз за сессию и дальше не меняется
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Разобрать JSON-документ меню и проверить инварианты
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Идентификаторы категорий должны быть непустыми, уникальными и не
    /// совпадать с ключом "все блюда": они же служат фрагментом URL.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.categories.len());
        for (idx, category) in self.categories.iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryId(idx + 1));
            }
            if category.id == Selection::ALL_KEY {
                return Err(CatalogError::ReservedCategoryId(category.id.clone()));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategoryId(category.id.clone()));
            }
        }
        Ok(())
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.category(id).is_some()
    }

    pub fn dish_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "categories": [
            {
                "id": "salads",
                "name": "Салаты",
                "description": "Свежие овощи",
                "items": [
                    { "name": "Ачичук", "price": 390, "weight": "250 г", "popular": true },
                    { "name": "Шакароб", "description": "Томаты и лук", "price": 420, "image": "shakarob.jpg" }
                ]
            },
            { "id": "plov", "name": "Плов", "items": [] }
        ]
    }"#;

    #[test]
    fn test_from_json_reads_optional_fields() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.dish_count(), 2);

        let salads = catalog.category("salads").unwrap();
        assert_eq!(salads.description.as_deref(), Some("Свежие овощи"));
        assert!(salads.items[0].popular);
        assert_eq!(salads.items[0].weight.as_deref(), Some("250 г"));
        assert!(!salads.items[1].popular);
        assert_eq!(salads.items[1].image.as_deref(), Some("shakarob.jpg"));

        assert!(catalog.category("plov").unwrap().description.is_none());
    }

    #[test]
    fn test_missing_items_is_malformed() {
        let err = Catalog::from_json(r#"{ "categories": [ { "id": "x", "name": "X" } ] }"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_missing_categories_is_malformed() {
        let err = Catalog::from_json("{}").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{ "categories": [
            { "id": "soups", "name": "Супы", "items": [] },
            { "id": "soups", "name": "Ещё супы", "items": [] }
        ] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategoryId(ref id) if id == "soups"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let json = r#"{ "categories": [ { "id": " ", "name": "?", "items": [] } ] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCategoryId(1)));
    }

    #[test]
    fn test_all_key_is_reserved() {
        let json = r#"{ "categories": [ { "id": "all", "name": "Всё", "items": [] } ] }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::ReservedCategoryId(ref id) if id == "all"));
    }

    #[test]
    fn test_contains() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.contains("plov"));
        assert!(!catalog.contains("desserts"));
    }
}
