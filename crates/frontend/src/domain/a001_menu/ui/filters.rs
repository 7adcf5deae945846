use contracts::domain::a001_menu::FilterControl;
use leptos::prelude::*;

/// Кнопки фильтра по категориям ("все блюда" первой)
#[component]
pub fn MenuFilters(
    #[prop(into)] filters: Signal<Vec<FilterControl>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div id="menu-filters" class="menu-filters" role="toolbar">
            {move || {
                filters
                    .get()
                    .into_iter()
                    .map(|filter| {
                        let key = filter.key().to_string();
                        let data_key = key.clone();
                        view! {
                            <button
                                type="button"
                                class="filter-tag"
                                class:filter-tag--active=filter.active
                                attr:data-category=data_key
                                aria-pressed=if filter.active { "true" } else { "false" }
                                on:click=move |_| on_select.run(key.clone())
                            >
                                {filter.label}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
