//! Modal dialog for creating a category.

#[cfg(test)]
#[path = "add_category_dialog_test.rs"]
mod add_category_dialog_test;

use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::categories::validate_new_category;

/// Both fields are required; the backend's error text is shown inline when
/// the create call fails.
#[component]
pub fn AddCategoryDialog(on_cancel: Callback<()>, on_created: Callback<Category>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let request = match validate_new_category(&name.get(), &description.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_category(&request).await {
                Ok(category) => on_created.run(category),
                Err(e) => {
                    leptos::logging::warn!("create category failed: {e}");
                    error.set(Some(e.user_message("create category")));
                }
            }
            release_busy(busy);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, on_created);
            release_busy(busy);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add Category"</h2>
                <form
                    class="dialog__form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        submit.run(());
                    }
                >
                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. Newsletters"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__input--multiline"
                            rows="3"
                            placeholder="What kind of emails belong here? The AI uses this to sort."
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Adding..." } else { "Add Category" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Clear the submit flag. A successful create unmounts the dialog first, so
/// the signal may already be disposed.
pub(crate) fn release_busy(busy: RwSignal<bool>) {
    let _ = busy.try_set(false);
}
