//! Login page with email + password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::form_field::FormField;
use crate::state::login_form::{LoginForm, SubmitOutcome};
use crate::state::session::Session;
use crate::util::validation::Field;

/// Entry page. A successful sign-in navigates to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let form = RwSignal::new(LoginForm::default());
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let outcome = form
            .try_update(|form| session.try_update(|session| form.submit(session)))
            .flatten();
        if let Some(route) = outcome.and_then(SubmitOutcome::destination) {
            navigate(route.path(), NavigateOptions::default());
        }
    };

    view! {
        <div class="login-container">
            <div class="login-card">
                <h2 class="login-title">"Login"</h2>
                <form on:submit=on_submit novalidate=true>
                    <FormField form=form field=Field::Email label="Email:" input_type="email"/>
                    <FormField form=form field=Field::Password label="Password:" input_type="password"/>
                    <button
                        type="submit"
                        class="submit-button"
                        disabled=move || form.with(LoginForm::is_submitting)
                    >
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                </form>
            </div>
        </div>
    }
}
