use leptos::prelude::*;
use web_sys::window;

/// Состояние каркаса сайта: мобильная навигация и "липкая" шапка.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub nav_open: RwSignal<bool>,
    pub header_scrolled: RwSignal<bool>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self {
            nav_open: RwSignal::new(false),
            header_scrolled: RwSignal::new(false),
        }
    }

    pub fn toggle_nav(&self) {
        self.nav_open.update(|open| *open = !*open);
        self.sync_body_scroll_lock();
    }

    pub fn close_nav(&self) {
        if self.nav_open.get_untracked() {
            self.nav_open.set(false);
            self.sync_body_scroll_lock();
        }
    }

    /// Пока мобильное меню открыто, страница под ним не прокручивается.
    fn sync_body_scroll_lock(&self) {
        let overflow = if self.nav_open.get_untracked() { "hidden" } else { "" };
        if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", overflow);
        }
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not found in context")
}
