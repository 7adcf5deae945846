//! Карточка блюда.
//!
//! Картинка грузится лениво; при ошибке загрузки подменяется заглушкой.
//! Карточка появляется с каскадной задержкой, когда попадает во viewport.

use crate::shared::browser::reveal::reveal_on_enter;
use contracts::domain::a001_menu::view_model::POPULAR_BADGE_LABEL;
use contracts::domain::a001_menu::DishCard;
use contracts::shared::placeholder::placeholder_data_uri;
use leptos::html::Article;
use leptos::prelude::*;

#[component]
pub fn DishCardView(card: DishCard, reveal_threshold: f64) -> impl IntoView {
    let node_ref = NodeRef::<Article>::new();
    let (src, set_src) = signal(card.image.src().to_string());
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        if let Some(el) = node_ref.get() {
            reveal_on_enter(&el, reveal_threshold);
        }
    });

    let on_image_error = move |_| {
        let fallback = placeholder_data_uri();
        if src.get_untracked() != fallback {
            set_src.set(fallback.to_string());
        }
    };

    let DishCard {
        name,
        description,
        price_label,
        weight,
        popular,
        reveal_delay_ms,
        ..
    } = card;
    let alt = name.clone();

    view! {
        <article
            node_ref=node_ref
            class="card dish-card"
            attr:data-animate=""
            style:animation-delay=format!("{}ms", reveal_delay_ms)
        >
            <div class="card__image">
                <img
                    src=move || src.get()
                    alt=alt
                    loading="lazy"
                    class:loaded=move || loaded.get()
                    on:load=move |_| set_loaded.set(true)
                    on:error=on_image_error
                />
                {popular.then(|| view! {
                    <span class="card__badge badge-popular">{POPULAR_BADGE_LABEL}</span>
                })}
            </div>
            <div class="card__content dish-card__content">
                <h4 class="card__title">{name}</h4>
                {description.map(|d| view! {
                    <p class="card__description dish-card__description">{d}</p>
                })}
                <div class="card__footer">
                    <span class="card__price">{price_label}</span>
                    {weight.map(|w| view! { <span class="card__weight">{w}</span> })}
                </div>
            </div>
        </article>
    }
}
