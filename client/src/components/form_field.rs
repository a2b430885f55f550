//! Labelled form input with its inline error message.

use leptos::prelude::*;

use crate::state::login_form::LoginForm;
use crate::util::validation::Field;

/// One labelled input bound to a `LoginForm` field.
///
/// Edits and blur are forwarded to the form model; the error line renders
/// only once the field is touched.
#[component]
pub fn FormField(
    form: RwSignal<LoginForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    let name = field.name();
    let error = move || form.with(|f| f.visible_error(field)).map(|e| e.to_string());

    view! {
        <div class="form-group">
            <label for=name>{label}</label>
            <input
                type=input_type
                name=name
                id=name
                class="form-control"
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.blur(field))
            />
            <Show when=move || error().is_some()>
                <div class="error-message">{move || error().unwrap_or_default()}</div>
            </Show>
        </div>
    }
}
