use crate::domain::a001_menu::api::fetch_catalog;
use crate::shared::browser::{location, scroll};
use contracts::domain::a001_menu::{HistoryUpdate, MenuState, MenuViewModel, SelectionChange};
use contracts::shared::config::MenuConfig;
use leptos::html::Div;
use leptos::prelude::*;

/// ViewModel страницы меню: владеет `MenuState` и выполняет побочные
/// эффекты переходов (история, прокрутка, загрузка).
#[derive(Clone, Copy)]
pub struct MenuPageViewModel {
    pub state: RwSignal<MenuState>,
    pub config: StoredValue<MenuConfig>,
    pub grid_ref: NodeRef<Div>,
}

impl MenuPageViewModel {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            state: RwSignal::new(MenuState::default()),
            config: StoredValue::new(config),
            grid_ref: NodeRef::new(),
        }
    }

    /// Загрузить каталог. Повторный вызов (кнопка повтора) начинает
    /// независимый запрос с нуля.
    pub fn load(&self) {
        let state = self.state;
        let url = self.config.with_value(|c| c.catalog_url.clone());

        state.update(|s| s.begin_load());
        log::debug!("Loading menu catalog from {}", url);

        wasm_bindgen_futures::spawn_local(async move {
            match fetch_catalog(&url).await {
                Ok(catalog) => {
                    log::info!(
                        "Menu loaded: {} categories, {} dishes",
                        catalog.categories.len(),
                        catalog.dish_count()
                    );
                    let fragment = location::current_fragment();
                    state.update(|s| s.finish_load(catalog, &fragment));
                }
                Err(e) => {
                    log::error!("Failed to load menu: {}", e);
                    state.update(|s| s.fail(e.to_string()));
                }
            }
        });
    }

    /// Клик по кнопке фильтра
    pub fn select(&self, key: &str) {
        let change = self.state.try_update(|s| s.select(key)).flatten();
        if let Some(change) = change {
            self.apply(change);
        }
    }

    /// Подписка на `hashchange` (назад/вперёд в браузере)
    pub fn follow_fragment(&self) {
        let this = *self;
        location::on_fragment_change(move |fragment| {
            let change = this.state.try_update(|s| s.apply_fragment(&fragment)).flatten();
            if let Some(change) = change {
                this.apply(change);
            }
        });
    }

    fn apply(&self, change: SelectionChange) {
        log::debug!("Menu selection: {}", change.selection.key());

        match &change.history {
            HistoryUpdate::Clear => location::clear_fragment(),
            HistoryUpdate::Replace(id) => location::replace_fragment(id),
            HistoryUpdate::Keep => {}
        }

        if change.scroll_into_view {
            if let Some(grid) = self.grid_ref.get_untracked() {
                scroll::scroll_into_view(&grid);
            }
        }
    }

    pub fn view_model(&self) -> Option<MenuViewModel> {
        let config = self.config;
        self.state.with(|s| config.with_value(|c| s.view(c)))
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }
}
