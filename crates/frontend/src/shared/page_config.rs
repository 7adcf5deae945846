//! Настройки страницы: значения по умолчанию плюс необязательный JSON-блок
//! `<script id="menu-config" type="application/json">` в разметке.

use contracts::shared::config::MenuConfig;
use leptos::prelude::*;
use web_sys::window;

const CONFIG_ELEMENT_ID: &str = "menu-config";

pub fn load_page_config() -> MenuConfig {
    let text = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(text) if !text.trim().is_empty() => parse_or_default(&text),
        _ => MenuConfig::default(),
    }
}

fn parse_or_default(text: &str) -> MenuConfig {
    match MenuConfig::from_json(text) {
        Ok(config) => {
            log::debug!("menu config override: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
            MenuConfig::default()
        }
    }
}

/// Настройки из контекста приложения (кладутся в `App`)
pub fn use_menu_config() -> MenuConfig {
    use_context::<MenuConfig>().expect("MenuConfig not provided in context (provide it in App)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_override_falls_back() {
        assert_eq!(parse_or_default("{ not json"), MenuConfig::default());
    }

    #[test]
    fn test_override_applies() {
        let config = parse_or_default(r#"{ "images_path": "/static/img/" }"#);
        assert_eq!(config.images_path, "/static/img/");
        assert_eq!(config.catalog_url, MenuConfig::default().catalog_url);
    }
}
