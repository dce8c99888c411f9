//! Read-only email list used by the category and uncategorized views.

#[cfg(test)]
#[path = "email_list_test.rs"]
mod email_list_test;

use leptos::prelude::*;

use crate::net::types::Email;

const PREVIEW_CHARS: usize = 140;

#[component]
pub fn EmailList(
    emails: Signal<Vec<Email>>,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    view! {
        <Show
            when=move || !emails.get().is_empty()
            fallback=move || {
                let empty_message = empty_message.clone();
                view! { <p class="email-list__empty">{empty_message}</p> }
            }
        >
            <ul class="email-list">
                {move || {
                    emails
                        .get()
                        .into_iter()
                        .map(|email| {
                            let unread = !email.is_read;
                            let sender = email.sender_label().to_owned();
                            let date = email.received_date().to_owned();
                            let preview = preview_text(&email.body_preview);
                            view! {
                                <li class="email-list__row" class:email-list__row--unread=unread>
                                    <div class="email-list__meta">
                                        <span class="email-list__sender">{sender}</span>
                                        <span class="email-list__date">{date}</span>
                                    </div>
                                    <div class="email-list__subject">{subject_or_placeholder(&email.subject)}</div>
                                    <div class="email-list__preview">{preview}</div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}

/// Collapse whitespace and cut at a character boundary.
pub(crate) fn preview_text(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= PREVIEW_CHARS {
        return collapsed;
    }
    let mut cut = collapsed.chars().take(PREVIEW_CHARS).collect::<String>();
    cut.push('…');
    cut
}

pub(crate) fn subject_or_placeholder(subject: &str) -> String {
    if subject.trim().is_empty() { "(no subject)".to_owned() } else { subject.to_owned() }
}
