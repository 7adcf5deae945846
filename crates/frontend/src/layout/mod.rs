pub mod footer;
pub mod global_context;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Каркас страницы:
///
/// ```text
/// +----------------------------+
/// |  Header (+ MobileNav)      |
/// +----------------------------+
/// |  main: children            |
/// +----------------------------+
/// |  Footer                    |
/// +----------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <Header />
        <main id="top" class="main">
            {children()}
        </main>
        <Footer />
    }
}
