//! Inline validation message under a form field.

use catalog::ErrorPayload;
use leptos::prelude::*;

/// First message for `field` in the current error payload, if any.
#[component]
pub fn FieldError(errors: RwSignal<Option<ErrorPayload>>, field: &'static str) -> impl IntoView {
    let message = move || {
        errors.with(|payload| {
            payload
                .as_ref()
                .and_then(|payload| payload.first_field_message(field))
                .map(str::to_owned)
        })
    };

    view! { {move || message().map(|text| view! { <p class="field-error">{text}</p> })} }
}

/// Detail and non-field messages, shown above the submit button.
#[component]
pub fn FormError(errors: RwSignal<Option<ErrorPayload>>) -> impl IntoView {
    let messages = move || {
        errors.with(|payload| match payload {
            Some(ErrorPayload::Detail(message)) => vec![message.clone()],
            Some(payload) => payload.non_field_messages().to_vec(),
            None => Vec::new(),
        })
    };

    view! {
        <Show when=move || !messages().is_empty()>
            <div class="form-error" role="alert">
                {move || messages().into_iter().map(|text| view! { <p>{text}</p> }).collect_view()}
            </div>
        </Show>
    }
}
