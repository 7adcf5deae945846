//! Состояние страницы меню.
//!
//! Один владеющий объект вместо глобальных переменных: UI держит его в
//! сигнале и вызывает переходы, а побочные эффекты (история браузера,
//! прокрутка) выполняет по возвращённому `SelectionChange`.

use super::catalog::Catalog;
use super::selection::Selection;
use super::view_model::{render, MenuViewModel};
use crate::shared::config::MenuConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum MenuState {
    #[default]
    Loading,
    Ready {
        catalog: Catalog,
        selection: Selection,
    },
    Failed {
        message: String,
    },
}

/// Что сделать с фрагментом URL после смены выбора
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryUpdate {
    /// Убрать фрагмент, оставив только путь
    Clear,
    /// Заменить фрагмент на `#<id>`
    Replace(String),
    /// Не трогать историю (смена пришла из самого URL)
    Keep,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub selection: Selection,
    pub history: HistoryUpdate,
    /// Прокрутить сетку к началу
    pub scroll_into_view: bool,
}

impl MenuState {
    /// Начать (или начать заново) загрузку. Прежние данные отбрасываются.
    pub fn begin_load(&mut self) {
        *self = MenuState::Loading;
    }

    /// Каталог загружен. Начальный выбор берётся из фрагмента URL;
    /// сам фрагмент не переписывается, даже если он неизвестен.
    pub fn finish_load(&mut self, catalog: Catalog, fragment: &str) {
        let selection = Selection::from_fragment(fragment, &catalog);
        *self = MenuState::Ready { catalog, selection };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = MenuState::Failed {
            message: message.into(),
        };
    }

    /// Клик по фильтру. Возвращает `None`, если каталог ещё не загружен.
    pub fn select(&mut self, key: &str) -> Option<SelectionChange> {
        let MenuState::Ready { catalog, selection } = self else {
            return None;
        };
        let next = Selection::resolve(key, catalog);
        let history = match next.to_fragment() {
            Some(id) => HistoryUpdate::Replace(id.to_string()),
            None => HistoryUpdate::Clear,
        };
        *selection = next.clone();
        Some(SelectionChange {
            selection: next,
            history,
            scroll_into_view: true,
        })
    }

    /// Фрагмент URL изменился (назад/вперёд, ручная правка адреса).
    /// История не трогается, иначе получится цикл навигации.
    pub fn apply_fragment(&mut self, fragment: &str) -> Option<SelectionChange> {
        let MenuState::Ready { catalog, selection } = self else {
            return None;
        };
        let next = Selection::from_fragment(fragment, catalog);
        // Обычные якоря страницы (#top, #contacts) тоже меняют фрагмент:
        // к сетке прокручиваем только для категории или пустого фрагмента.
        let targets_menu = !next.is_all() || fragment.trim_start_matches('#').is_empty();
        *selection = next.clone();
        Some(SelectionChange {
            selection: next,
            history: HistoryUpdate::Keep,
            scroll_into_view: targets_menu,
        })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, MenuState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            MenuState::Failed { message } => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            MenuState::Ready { selection, .. } => Some(selection),
            _ => None,
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            MenuState::Ready { catalog, .. } => Some(catalog),
            _ => None,
        }
    }

    /// Модель представления для текущего состояния, если каталог загружен
    pub fn view(&self, config: &MenuConfig) -> Option<MenuViewModel> {
        match self {
            MenuState::Ready { catalog, selection } => Some(render(catalog, selection, config)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_menu::catalog::Category;

    fn ready() -> MenuState {
        let catalog = Catalog {
            categories: vec![Category {
                id: "soups".into(),
                name: "Супы".into(),
                description: None,
                items: vec![],
            }],
        };
        let mut state = MenuState::default();
        state.finish_load(catalog, "");
        state
    }

    #[test]
    fn test_default_is_loading() {
        assert!(MenuState::default().is_loading());
    }

    #[test]
    fn test_select_before_load_is_ignored() {
        let mut state = MenuState::Loading;
        assert_eq!(state.select("soups"), None);
        assert_eq!(state.apply_fragment("#soups"), None);
        assert!(state.is_loading());
    }

    #[test]
    fn test_select_updates_history() {
        let mut state = ready();
        let change = state.select("soups").unwrap();
        assert_eq!(change.history, HistoryUpdate::Replace("soups".into()));
        assert!(change.scroll_into_view);
        assert_eq!(state.selection(), Some(&Selection::Category("soups".into())));

        let change = state.select(Selection::ALL_KEY).unwrap();
        assert_eq!(change.history, HistoryUpdate::Clear);
        assert_eq!(state.selection(), Some(&Selection::All));
    }

    #[test]
    fn test_select_unknown_behaves_as_all() {
        let mut state = ready();
        state.select("soups");
        let change = state.select("desserts").unwrap();
        assert_eq!(change.selection, Selection::All);
        assert_eq!(change.history, HistoryUpdate::Clear);
    }

    #[test]
    fn test_apply_fragment_keeps_history() {
        let mut state = ready();
        let change = state.apply_fragment("#soups").unwrap();
        assert_eq!(change.history, HistoryUpdate::Keep);
        assert_eq!(change.selection, Selection::Category("soups".into()));

        let change = state.apply_fragment("#nope").unwrap();
        assert_eq!(change.selection, Selection::All);
        assert_eq!(change.history, HistoryUpdate::Keep);
        assert!(!change.scroll_into_view);
    }

    #[test]
    fn test_empty_fragment_scrolls_to_menu() {
        let mut state = ready();
        state.apply_fragment("#soups");
        let change = state.apply_fragment("").unwrap();
        assert_eq!(change.selection, Selection::All);
        assert!(change.scroll_into_view);
    }

    #[test]
    fn test_retry_resets_to_loading() {
        let mut state = MenuState::default();
        state.fail("HTTP 500");
        assert_eq!(state.error(), Some("HTTP 500"));
        state.begin_load();
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }
}
