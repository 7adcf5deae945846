pub mod view_model;

use self::view_model::MenuPageViewModel;
use crate::domain::a001_menu::ui::dish_card::DishCardView;
use crate::domain::a001_menu::ui::filters::MenuFilters;
use crate::shared::page_config::use_menu_config;
use contracts::domain::a001_menu::{CategoryHeading, MenuEntry};
use leptos::prelude::*;
use thaw::*;

/// Раздел меню: фильтры, индикатор загрузки и сетка карточек.
///
/// Точки монтирования `#menu-filters`, `#menu-loader`, `#menu-grid`
/// совпадают с разметкой и стилями сайта.
#[component]
#[allow(non_snake_case)]
pub fn MenuPage() -> impl IntoView {
    let config = use_menu_config();
    let reveal_threshold = config.reveal_threshold;
    let vm = MenuPageViewModel::new(config);

    vm.follow_fragment();
    vm.load();

    let filters = Signal::derive(move || {
        vm.view_model()
            .map(|model| model.filters)
            .unwrap_or_default()
    });

    view! {
        <section id="menu" class="section menu-section">
            <div class="container">
                <h2 class="section__title">"Меню"</h2>

                <MenuFilters
                    filters=filters
                    on_select=move |key: String| vm.select(&key)
                />

                <div
                    id="menu-loader"
                    class="menu-loader"
                    style:display=move || if vm.is_loading() { "flex" } else { "none" }
                >
                    <Spinner label="Загружаем меню…" />
                </div>

                <div id="menu-grid" class="menu-grid" node_ref=vm.grid_ref>
                    {move || {
                        if let Some(message) = vm.error() {
                            return view! { <MenuError message=message on_retry=move |_: ()| vm.load() /> }
                                .into_any();
                        }
                        let Some(model) = vm.view_model() else {
                            return ().into_any();
                        };
                        model
                            .entries
                            .into_iter()
                            .map(|entry| match entry {
                                MenuEntry::Heading(heading) => {
                                    view! { <CategoryTitle heading=heading /> }.into_any()
                                }
                                MenuEntry::Card(card) => {
                                    view! {
                                        <DishCardView card=card reveal_threshold=reveal_threshold />
                                    }
                                    .into_any()
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryTitle(heading: CategoryHeading) -> impl IntoView {
    let anchor = heading.anchor();
    view! {
        <div class="menu-category" id=anchor>
            <h3 class="menu-category__title">{heading.title}</h3>
            {heading.description.map(|d| view! {
                <p class="menu-category__description">{d}</p>
            })}
        </div>
    }
}

/// Сообщение об ошибке загрузки с кнопкой повтора
#[component]
fn MenuError(message: String, #[prop(into)] on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="menu-error">
            <p>"Произошла ошибка при загрузке меню."</p>
            <p>{message}</p>
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| on_retry.run(())
            >
                "Попробовать снова"
            </Button>
        </div>
    }
}
