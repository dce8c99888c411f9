//! Dismissible success/failure banner for dashboard actions.

use leptos::prelude::*;

use crate::state::categories::Notice;

#[component]
pub fn NoticeBanner(notice: Signal<Option<Notice>>, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        {move || {
            notice
                .get()
                .map(|n| {
                    let (class, text) = match n {
                        Notice::Success(text) => ("notice notice--success", text),
                        Notice::Failure(text) => ("notice notice--error", text),
                    };
                    view! {
                        <div class=class role="status">
                            <span>{text}</span>
                            <button class="notice__close" title="Dismiss" on:click=move |_| on_dismiss.run(())>
                                "×"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
