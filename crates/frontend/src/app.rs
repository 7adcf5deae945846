use crate::domain::a001_menu::ui::MenuPage;
use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use crate::shared::browser::scroll::scroll_to_anchor;
use crate::shared::page_config::load_page_config;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Настройки страницы доступны всем компонентам через контекст.
    let config = load_page_config();
    let gap = config.anchor_offset_px;
    provide_context(config);

    // Мобильное меню и липкая шапка
    provide_context(SiteContext::new());

    view! {
        <ConfigProvider>
            <Shell>
                <section id="about" class="section hero">
                    <div class="container">
                        <h1 class="hero__title">"Чайхона Согдиана"</h1>
                        <p class="hero__subtitle">"Узбекская и таджикская кухня, плов из казана и свежая самса из тандыра."</p>
                        <a
                            class="btn btn--primary"
                            href="#menu"
                            on:click=move |ev| {
                                if scroll_to_anchor("#menu", gap) {
                                    ev.prevent_default();
                                }
                            }
                        >
                            "Смотреть меню"
                        </a>
                    </div>
                </section>
                <MenuPage />
            </Shell>
        </ConfigProvider>
    }
}
