//! Signed-out branch of the auth gate.

use leptos::prelude::*;

use crate::util::auth::{login_url, start_login};

#[component]
pub fn LoginPrompt(
    #[prop(into, default = "Please sign in to access your dashboard and start organizing your emails.".to_owned())]
    message: String,
) -> impl IntoView {
    view! {
        <section class="page page--login">
            <div class="page__heading">
                <h1>"Welcome to AI Email Sorter"</h1>
            </div>
            <div class="page__body">
                <p class="login-prompt__message">{message}</p>
                <a
                    href=login_url()
                    class="btn btn--primary login-prompt__button"
                    on:click=move |ev| {
                        ev.prevent_default();
                        start_login();
                    }
                >
                    "Sign in with Google"
                </a>
            </div>
        </section>
    }
}
