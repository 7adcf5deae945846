//! Настройки страницы меню.
//!
//! Значения по умолчанию соответствуют раскладке статического сайта:
//! `data/menu.json` рядом со страницей и картинки в `images/`.
//! Страница может переопределить часть полей JSON-блоком
//! `<script id="menu-config" type="application/json">`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Относительный путь к JSON каталога
    pub catalog_url: String,
    /// Каталог изображений блюд
    pub images_path: String,
    /// Шаг каскадной задержки появления карточек
    pub reveal_stagger_ms: u32,
    /// Доля видимой площади карточки для срабатывания анимации
    pub reveal_threshold: f64,
    /// Прокрутка, после которой шапка становится "липкой"
    pub sticky_threshold_px: f64,
    /// Зазор под шапкой при прокрутке к якорю
    pub anchor_offset_px: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            catalog_url: "data/menu.json".to_string(),
            images_path: "images/".to_string(),
            reveal_stagger_ms: 50,
            reveal_threshold: 0.1,
            sticky_threshold_px: 50.0,
            anchor_offset_px: 20.0,
        }
    }
}

impl MenuConfig {
    /// Разобрать JSON-переопределение; отсутствующие поля берутся по умолчанию.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Путь к изображению блюда
    pub fn image_url(&self, file: &str) -> String {
        if self.images_path.is_empty() || self.images_path.ends_with('/') {
            format!("{}{}", self.images_path, file)
        } else {
            format!("{}/{}", self.images_path, file)
        }
    }
}
