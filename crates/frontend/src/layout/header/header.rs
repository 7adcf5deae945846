use crate::layout::global_context::{use_site_context, SiteContext};
use crate::layout::header::mobile_nav::MobileNav;
use crate::shared::browser::scroll::scroll_to_anchor;
use crate::shared::page_config::use_menu_config;
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Якорные ссылки навигации: (href, подпись)
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "О нас"),
    ("#menu", "Меню"),
    ("#contacts", "Контакты"),
];

/// Логотип ведёт к началу страницы (`<main id="top">`)
pub const LOGO_HREF: &str = "#top";

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_site_context();
    let config = use_menu_config();
    let gap = config.anchor_offset_px;

    watch_scroll(ctx, config.sticky_threshold_px);

    view! {
        <header class="header" class:header--scrolled=move || ctx.header_scrolled.get()>
            <div class="container header__inner">
                <a
                    class="header__logo"
                    href=LOGO_HREF
                    on:click=move |ev| {
                        if scroll_to_anchor(LOGO_HREF, gap) {
                            ev.prevent_default();
                        }
                    }
                >
                    "Чайхона Согдиана"
                </a>
                <nav class="nav">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    class="nav__link"
                                    href=*href
                                    on:click=move |ev| {
                                        if scroll_to_anchor(href, gap) {
                                            ev.prevent_default();
                                        }
                                    }
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    type="button"
                    class="burger"
                    class:burger--active=move || ctx.nav_open.get()
                    aria-label="Меню"
                    aria-expanded=move || if ctx.nav_open.get() { "true" } else { "false" }
                    on:click=move |_| ctx.toggle_nav()
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
        <MobileNav />
    }
}

/// Модификатор `header--scrolled` после порога прокрутки.
/// Обработка прокрутки не чаще одного раза за кадр.
fn watch_scroll(ctx: SiteContext, threshold: f64) {
    let Some(w) = window() else {
        return;
    };

    let ticking = Rc::new(Cell::new(false));

    let frame_ticking = ticking.clone();
    let on_frame = Closure::wrap(Box::new(move || {
        let y = window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0);
        let scrolled = is_scrolled(y, threshold);
        if ctx.header_scrolled.get_untracked() != scrolled {
            ctx.header_scrolled.set(scrolled);
        }
        frame_ticking.set(false);
    }) as Box<dyn FnMut()>);
    let frame_fn: js_sys::Function = on_frame.as_ref().unchecked_ref::<js_sys::Function>().clone();
    on_frame.forget();

    let on_scroll = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if ticking.get() {
            return;
        }
        ticking.set(true);
        if let Some(w) = window() {
            let _ = w.request_animation_frame(&frame_fn);
        }
    }) as Box<dyn FnMut(_)>);

    let _ = w.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    // Шапка смонтирована на всё время жизни страницы.
    on_scroll.forget();
}

pub fn is_scrolled(page_y: f64, threshold: f64) -> bool {
    page_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::browser::scroll::anchor_id;

    #[test]
    fn test_is_scrolled() {
        assert!(!is_scrolled(0.0, 50.0));
        assert!(!is_scrolled(50.0, 50.0));
        assert!(is_scrolled(50.5, 50.0));
    }

    #[test]
    fn test_nav_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|(href, _)| anchor_id(href).is_some()));
    }

    #[test]
    fn test_logo_link_is_smooth_scroll_anchor() {
        assert_eq!(anchor_id(LOGO_HREF), Some("top"));
    }
}
