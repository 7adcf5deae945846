//! Одноразовая анимация появления элементов при входе во viewport.
//!
//! Каждый элемент наблюдается независимо: при первом пересечении получает
//! класс `animated` и снимается с наблюдения. Рендер это не задерживает.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub const REVEALED_CLASS: &str = "animated";

// Один наблюдатель на страницу; создаётся при первой карточке.
thread_local! {
    static OBSERVER: RefCell<Option<IntersectionObserver>> = const { RefCell::new(None) };
}

/// Поставить элемент под наблюдение. Без поддержки IntersectionObserver
/// элемент показывается сразу.
pub fn reveal_on_enter(element: &Element, threshold: f64) {
    let observer = OBSERVER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = create_observer(threshold);
        }
        slot.clone()
    });

    match observer {
        Some(observer) => observer.observe(element),
        None => reveal(element),
    }
}

fn reveal(element: &Element) {
    let _ = element.class_list().add_1(REVEALED_CLASS);
}

fn create_observer(threshold: f64) -> Option<IntersectionObserver> {
    let window = web_sys::window()?;
    let supported =
        js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if !supported {
        log::debug!("IntersectionObserver is not available, reveal animations are immediate");
        return None;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options);
    // Наблюдатель живёт всё время жизни страницы.
    callback.forget();

    match observer {
        Ok(observer) => Some(observer),
        Err(e) => {
            log::warn!("Failed to create IntersectionObserver: {:?}", e);
            None
        }
    }
}
