//! Чистая модель представления меню.
//!
//! `render` превращает пару (каталог, выбор) в набор описаний: кнопки
//! фильтров и упорядоченный список заголовков и карточек. Никакого DOM здесь
//! нет, поэтому вся логика фильтрации проверяется обычными тестами.

use super::catalog::{Catalog, Category, Dish};
use super::selection::Selection;
use crate::shared::config::MenuConfig;
use crate::shared::placeholder::placeholder_data_uri;
use crate::shared::price::format_price;

/// Подпись кнопки "все блюда"
pub const ALL_FILTER_LABEL: &str = "Все блюда";

/// Подпись бейджа популярного блюда
pub const POPULAR_BADGE_LABEL: &str = "Хит";

#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    pub selection: Selection,
    pub label: String,
    pub active: bool,
}

impl FilterControl {
    /// Значение `data-category` кнопки
    pub fn key(&self) -> &str {
        self.selection.key()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryHeading {
    pub category_id: String,
    pub title: String,
    pub description: Option<String>,
}

impl CategoryHeading {
    /// `id` элемента заголовка, на него можно ссылаться якорем
    pub fn anchor(&self) -> String {
        format!("category-{}", self.category_id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DishImage {
    Photo(String),
    Placeholder,
}

impl DishImage {
    pub fn src(&self) -> &str {
        match self {
            DishImage::Photo(url) => url.as_str(),
            DishImage::Placeholder => placeholder_data_uri(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DishCard {
    pub category_id: String,
    /// Позиция блюда внутри категории
    pub position: usize,
    pub name: String,
    pub description: Option<String>,
    pub price_label: String,
    pub weight: Option<String>,
    pub popular: bool,
    pub image: DishImage,
    /// Каскадная задержка анимации появления
    pub reveal_delay_ms: u32,
}

impl DishCard {
    /// Стабильный ключ карточки для списков в UI
    pub fn key(&self) -> String {
        format!("{}/{}", self.category_id, self.position)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuEntry {
    Heading(CategoryHeading),
    Card(DishCard),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuViewModel {
    pub filters: Vec<FilterControl>,
    pub entries: Vec<MenuEntry>,
}

impl MenuViewModel {
    pub fn cards(&self) -> impl Iterator<Item = &DishCard> {
        self.entries.iter().filter_map(|e| match e {
            MenuEntry::Card(card) => Some(card),
            MenuEntry::Heading(_) => None,
        })
    }

    pub fn headings(&self) -> impl Iterator<Item = &CategoryHeading> {
        self.entries.iter().filter_map(|e| match e {
            MenuEntry::Heading(heading) => Some(heading),
            MenuEntry::Card(_) => None,
        })
    }

    pub fn active_filter(&self) -> Option<&FilterControl> {
        self.filters.iter().find(|f| f.active)
    }
}

/// Построить модель представления.
///
/// Выбор, которого нет в каталоге, рисуется как "все блюда".
pub fn render(catalog: &Catalog, selection: &Selection, config: &MenuConfig) -> MenuViewModel {
    let selection = selection.clone().validated(catalog);

    MenuViewModel {
        filters: render_filters(catalog, &selection),
        entries: render_entries(catalog, &selection, config),
    }
}

fn render_filters(catalog: &Catalog, selection: &Selection) -> Vec<FilterControl> {
    let mut filters = Vec::with_capacity(catalog.categories.len() + 1);
    filters.push(FilterControl {
        selection: Selection::All,
        label: ALL_FILTER_LABEL.to_string(),
        active: selection.is_all(),
    });
    filters.extend(catalog.categories.iter().map(|category| {
        let control = Selection::Category(category.id.clone());
        FilterControl {
            active: &control == selection,
            selection: control,
            label: category.name.clone(),
        }
    }));
    filters
}

fn render_entries(catalog: &Catalog, selection: &Selection, config: &MenuConfig) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    let mut card_index: u32 = 0;

    for category in catalog.categories.iter().filter(|c| selection.shows(&c.id)) {
        // В режиме одной категории заголовок дублирует активный фильтр.
        if selection.is_all() {
            entries.push(MenuEntry::Heading(heading(category)));
        }
        for (position, dish) in category.items.iter().enumerate() {
            let delay = card_index.saturating_mul(config.reveal_stagger_ms);
            entries.push(MenuEntry::Card(card(category, position, dish, delay, config)));
            card_index += 1;
        }
    }

    entries
}

fn heading(category: &Category) -> CategoryHeading {
    CategoryHeading {
        category_id: category.id.clone(),
        title: category.name.clone(),
        description: non_empty(&category.description),
    }
}

fn card(
    category: &Category,
    position: usize,
    dish: &Dish,
    reveal_delay_ms: u32,
    config: &MenuConfig,
) -> DishCard {
    let image = match non_empty(&dish.image) {
        Some(file) => DishImage::Photo(config.image_url(&file)),
        None => DishImage::Placeholder,
    };

    DishCard {
        category_id: category.id.clone(),
        position,
        name: dish.name.clone(),
        description: non_empty(&dish.description),
        price_label: format_price(dish.price),
        weight: non_empty(&dish.weight),
        popular: dish.popular,
        image,
        reveal_delay_ms,
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}
