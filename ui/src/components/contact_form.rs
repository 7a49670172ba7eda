use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::contact::{self, ContactForm, Field, SubmitterHandle};
use crate::state::PageState;
use crate::t;

/// The contact form. Delivery goes through the [`SubmitterHandle`] found in
/// context, or the simulated submitter when the platform provides none.
#[component]
pub fn ContactFormView() -> Element {
    let state = use_context::<PageState>();
    let submitter = try_use_context::<SubmitterHandle>().unwrap_or_default();
    let mut form = use_signal(ContactForm::default);

    let lang = (state.lang)();
    let snapshot = form();
    let submit_label = snapshot.submit_label(lang);
    let rows = [
        (Field::Name, t!(lang, "label-name"), t!(lang, "placeholder-name")),
        (Field::Email, t!(lang, "label-email"), t!(lang, "placeholder-email")),
        (Field::Subject, t!(lang, "label-subject"), t!(lang, "placeholder-subject")),
        (Field::Message, t!(lang, "label-message"), t!(lang, "placeholder-message")),
    ]
    .map(|(field, label, placeholder)| FieldRow {
        field,
        name: field.name(),
        label,
        placeholder,
        value: snapshot.fields.get(field).to_string(),
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(pending) = form.with_mut(|f| f.begin_submit(lang)) else {
            return;
        };
        let submitter = submitter.clone();
        spawn(async move {
            let outcome = submitter.0.submit(&pending.fields).await;
            let Some(status_id) = form.with_mut(|f| f.finish(outcome, pending.lang)) else {
                return;
            };
            let expired = contact::dismissal_after_display(status_id).await;
            debug!("dismissing status message {expired}");
            form.with_mut(|f| f.dismiss(expired));
        });
    };

    rsx! {
        form {
            id: "contactForm",
            class: "contact-form",
            novalidate: true,
            onsubmit: on_submit,
            for FieldRow { field, name, label, placeholder, value } in rows {
                div { key: "{name}", class: "form-group",
                    label { r#for: field.name(), "{label}" }
                    if field == Field::Message {
                        textarea {
                            id: field.name(),
                            name: field.name(),
                            rows: 5,
                            placeholder: "{placeholder}",
                            value: "{value}",
                            oninput: move |evt| form.with_mut(|f| f.fields.set(field, evt.value())),
                        }
                    } else {
                        input {
                            id: field.name(),
                            name: field.name(),
                            r#type: input_type(field),
                            placeholder: "{placeholder}",
                            value: "{value}",
                            oninput: move |evt| form.with_mut(|f| f.fields.set(field, evt.value())),
                        }
                    }
                }
            }
            button {
                r#type: "submit",
                class: "btn btn--primary",
                disabled: snapshot.is_submitting(),
                span { "{submit_label}" }
            }
            if let Some(status) = snapshot.status() {
                div { class: status.kind.class(), "{status.text}" }
            }
        }
    }
}

/// Keyed by `name` so a language switch re-labels rows instead of remounting them.
struct FieldRow {
    field: Field,
    name: &'static str,
    label: String,
    placeholder: String,
    value: String,
}

fn input_type(field: Field) -> &'static str {
    match field {
        Field::Email => "email",
        _ => "text",
    }
}
