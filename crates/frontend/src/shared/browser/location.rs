//! Фрагмент URL как единственное сохраняемое представление фильтра меню.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Текущий фрагмент без `#` (пустая строка, если его нет или нет окна)
pub fn current_fragment() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| strip_hash(&hash).to_string())
        .unwrap_or_default()
}

/// Заменить фрагмент без навигации и без новой записи в истории
pub fn replace_fragment(id: &str) {
    replace_url(&format!("#{}", id));
}

/// Убрать фрагмент целиком, оставив путь и query
pub fn clear_fragment() {
    let Some(location) = window().map(|w| w.location()) else {
        return;
    };
    let path = location.pathname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    replace_url(&url_without_fragment(&path, &search));
}

fn replace_url(url: &str) {
    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
                log::warn!("history.replaceState failed: {:?}", e);
            }
        }
    }
}

/// Подписаться на `hashchange` на всё время жизни страницы.
///
/// Колбэк получает новый фрагмент без `#`.
pub fn on_fragment_change(callback: impl Fn(String) + 'static) {
    let Some(w) = window() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move |_event: web_sys::HashChangeEvent| {
        callback(current_fragment());
    }) as Box<dyn FnMut(_)>);

    let _ = w.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    // Слушатель живёт столько же, сколько страница.
    closure.forget();
}

pub fn strip_hash(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

pub fn url_without_fragment(path: &str, search: &str) -> String {
    let path = if path.is_empty() { "/" } else { path };
    format!("{}{}", path, search)
}
