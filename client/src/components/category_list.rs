//! Category list with per-row delete confirmation.

use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::emails::email_count_label;

#[component]
pub fn CategoryList(
    categories: Signal<Vec<Category>>,
    loading: Signal<bool>,
    on_add: Callback<()>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let confirming = RwSignal::new(None::<i64>);

    view! {
        <section class="category-list">
            <div class="category-list__header">
                <h2>"Categories"</h2>
                <button class="btn btn--primary" on:click=move |_| on_add.run(())>
                    "+ Add Category"
                </button>
            </div>
            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="category-list__empty">"Loading categories..."</p> }
            >
                <Show
                    when=move || !categories.get().is_empty()
                    fallback=move || {
                        view! {
                            <p class="category-list__empty">
                                "No categories yet. Add one to start sorting your inbox."
                            </p>
                        }
                    }
                >
                    <ul class="category-list__items">
                        {move || {
                            categories
                                .get()
                                .into_iter()
                                .map(|c| {
                                    let id = c.id;
                                    let href = format!("/categories/{id}");
                                    view! {
                                        <li class="category-list__item">
                                            <a class="category-list__link" href=href>
                                                <span class="category-list__name">{c.name}</span>
                                                <span class="category-list__description">{c.description}</span>
                                            </a>
                                            <span class="category-list__count">{email_count_label(c.email_count as usize)}</span>
                                            <Show
                                                when=move || confirming.get() == Some(id)
                                                fallback=move || {
                                                    view! {
                                                        <button
                                                            class="btn btn--danger category-list__delete"
                                                            on:click=move |_| confirming.set(Some(id))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    }
                                                }
                                            >
                                                <span class="category-list__confirm">
                                                    "Delete this category?"
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| {
                                                            confirming.set(None);
                                                            on_delete.run(id);
                                                        }
                                                    >
                                                        "Yes"
                                                    </button>
                                                    <button class="btn" on:click=move |_| confirming.set(None)>
                                                        "No"
                                                    </button>
                                                </span>
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
            </Show>
        </section>
    }
}
