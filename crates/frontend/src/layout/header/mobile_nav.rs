use crate::layout::global_context::use_site_context;
use crate::layout::header::header::NAV_LINKS;
use crate::shared::browser::scroll::scroll_to_anchor;
use crate::shared::page_config::use_menu_config;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

/// Выезжающее мобильное меню с затемнением.
///
/// Закрывается по клику на затемнение, по любой ссылке и по Escape.
#[component]
pub fn MobileNav() -> impl IntoView {
    let ctx = use_site_context();
    let gap = use_menu_config().anchor_offset_px;

    let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
        if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
            if keyboard_event.key() == "Escape" && ctx.nav_open.get_untracked() {
                ctx.close_nav();
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    // MobileNav монтируется один раз вместе с шапкой.
    closure.forget();

    view! {
        <div
            class="mobile-nav__overlay"
            class:mobile-nav__overlay--visible=move || ctx.nav_open.get()
            on:click=move |_| ctx.close_nav()
        ></div>
        <nav class="mobile-nav" class:mobile-nav--open=move || ctx.nav_open.get()>
            {NAV_LINKS
                .iter()
                .map(|(href, label)| {
                    view! {
                        <a
                            class="mobile-nav__link"
                            href=*href
                            on:click=move |ev| {
                                ctx.close_nav();
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
    }
}
