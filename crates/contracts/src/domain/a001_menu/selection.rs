use super::catalog::Catalog;
use serde::{Deserialize, Serialize};

/// Активный фильтр меню: все блюда или одна категория.
///
/// `Category` допустим только для идентификатора, присутствующего в
/// загруженном каталоге. Все конструкторы, принимающие внешние данные,
/// проверяют это и откатываются к `All`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Category(String),
}

impl Selection {
    /// Ключ контрола фильтра ("all" для всех блюд)
    pub const ALL_KEY: &'static str = "all";

    /// Выбор по ключу контрола. Неизвестный ключ — это `All`.
    pub fn resolve(key: &str, catalog: &Catalog) -> Self {
        if key == Self::ALL_KEY || !catalog.contains(key) {
            Selection::All
        } else {
            Selection::Category(key.to_string())
        }
    }

    /// Выбор по фрагменту URL (`#mains`, `mains` или пустая строка).
    pub fn from_fragment(fragment: &str, catalog: &Catalog) -> Self {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        if raw.is_empty() {
            return Selection::All;
        }
        let decoded = urlencoding::decode(raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        if catalog.contains(&decoded) {
            Selection::Category(decoded)
        } else {
            Selection::All
        }
    }

    /// Перепроверить выбор против каталога
    pub fn validated(self, catalog: &Catalog) -> Self {
        match self {
            Selection::Category(id) if catalog.contains(&id) => Selection::Category(id),
            _ => Selection::All,
        }
    }

    /// Фрагмент URL без `#`; `None` означает, что фрагмент надо убрать целиком.
    pub fn to_fragment(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Category(id) => Some(id.as_str()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Selection::All => Self::ALL_KEY,
            Selection::Category(id) => id.as_str(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn shows(&self, category_id: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Category(id) => id == category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_menu::catalog::Category;

    fn catalog() -> Catalog {
        Catalog {
            categories: ["soups", "plov", "ширмой"]
                .into_iter()
                .map(|id| Category {
                    id: id.to_string(),
                    name: id.to_uppercase(),
                    description: None,
                    items: vec![],
                })
                .collect(),
        }
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let c = catalog();
        assert_eq!(Selection::resolve("plov", &c), Selection::Category("plov".into()));
        assert_eq!(Selection::resolve("desserts", &c), Selection::All);
        assert_eq!(Selection::resolve("all", &c), Selection::All);
        assert_eq!(Selection::resolve("", &c), Selection::All);
    }

    #[test]
    fn test_from_fragment() {
        let c = catalog();
        assert_eq!(Selection::from_fragment("", &c), Selection::All);
        assert_eq!(Selection::from_fragment("#", &c), Selection::All);
        assert_eq!(Selection::from_fragment("#soups", &c), Selection::Category("soups".into()));
        assert_eq!(Selection::from_fragment("soups", &c), Selection::Category("soups".into()));
        assert_eq!(Selection::from_fragment("#desserts", &c), Selection::All);
    }

    #[test]
    fn test_from_fragment_percent_encoded() {
        let c = catalog();
        let encoded = format!("#{}", urlencoding::encode("ширмой"));
        assert_eq!(
            Selection::from_fragment(&encoded, &c),
            Selection::Category("ширмой".into())
        );
    }

    #[test]
    fn test_fragment_round_trip() {
        let c = catalog();
        for category in &c.categories {
            let selection = Selection::resolve(&category.id, &c);
            let fragment = selection.to_fragment().unwrap();
            assert_eq!(fragment, category.id);
            assert_eq!(Selection::from_fragment(fragment, &c), selection);
        }
        assert_eq!(Selection::All.to_fragment(), None);
    }

    #[test]
    fn test_validated() {
        let c = catalog();
        assert_eq!(
            Selection::Category("soups".into()).validated(&c),
            Selection::Category("soups".into())
        );
        assert_eq!(Selection::Category("gone".into()).validated(&c), Selection::All);
    }
}
