use leptos::prelude::*;

/// Подвал с контактами; на него ведёт якорь `#contacts`
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer id="contacts" class="footer">
            <div class="container footer__inner">
                <div class="footer__contacts">
                    <p class="footer__title">"Чайхона Согдиана"</p>
                    <p>"Ежедневно с 11:00 до 23:00"</p>
                </div>
                <p class="footer__copy">{format!("© {}", year)}</p>
            </div>
        </footer>
    }
}
