//! Плавная прокрутка: к якорям и к сетке меню после смены фильтра.

use web_sys::{
    window, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};
use wasm_bindgen::JsCast;

/// Прокрутить элемент к началу viewport
pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Прокрутить к якорю `#id` с учётом высоты шапки.
///
/// Возвращает `false`, если ссылка не якорная или цели нет на странице:
/// тогда браузер обрабатывает клик сам.
pub fn scroll_to_anchor(href: &str, gap_px: f64) -> bool {
    let Some(id) = anchor_id(href) else {
        return false;
    };
    let Some(window) = window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };

    let header_height = document
        .query_selector(".header")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| el.offset_height() as f64)
        .unwrap_or(0.0);
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let top = anchor_target_top(
        target.get_bounding_client_rect().top(),
        page_y,
        header_height,
        gap_px,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// Идентификатор цели из `#id`; голый `#` и внешние ссылки не считаются.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn anchor_target_top(rect_top: f64, page_y: f64, header_height: f64, gap_px: f64) -> f64 {
    rect_top + page_y - header_height - gap_px
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("#menu"), Some("menu"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/about"), None);
        assert_eq!(anchor_id(""), None);
    }

    #[test]
    fn test_anchor_target_top() {
        assert_eq!(anchor_target_top(300.0, 1000.0, 80.0, 20.0), 1200.0);
        assert_eq!(anchor_target_top(-50.0, 400.0, 0.0, 20.0), 330.0);
    }
}
