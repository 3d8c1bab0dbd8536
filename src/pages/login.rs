//! Sign-in page: form column on the left, showcase column on the right.
//!
//! The back button, the "Create Account" / "Forgot password" links and the
//! Facebook/Google buttons are placeholders with no behavior.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::brand_logo::BrandLogo;
use crate::components::form_field::FormField;
use crate::components::showcase_panel::ShowcasePanel;
use crate::net::auth::LogAuthenticator;
use crate::net::types::AuthOutcome;
use crate::state::login_form::{FormStatus, LoginForm};
use crate::util::validation::{Field, FieldError};

/// Banner text shown under the form after a submit attempt.
///
/// Field errors render inline next to their inputs, so they produce no banner.
pub(crate) fn submit_message(result: &Result<AuthOutcome, Vec<FieldError>>) -> String {
    match result {
        Ok(AuthOutcome::Accepted) | Err(_) => String::new(),
        Ok(AuthOutcome::Rejected { reason }) => format!("Sign in failed: {reason}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut result = None;
        form.update(|f| result = Some(f.try_submit(&LogAuthenticator)));
        if let Some(result) = result {
            info.set(submit_message(&result));
        }
    };

    view! {
        <div class="login-page">
            <div class="login-page__divider"></div>
            <section class="login-page__form-column">
                <button type="button" class="login-back">
                    <span class="login-back__icon" aria-hidden="true">"‹"</span>
                    "Back to home"
                </button>
                <div class="login-page__form-wrap">
                    <div class="login-card">
                        <BrandLogo/>
                        <h2 class="login-card__title">"Sign in"</h2>
                        <p class="login-card__subtitle">
                            "Don't have account "
                            <a href="#" class="login-card__link">"Create Account"</a>
                        </p>
                        <form class="login-form" novalidate=true on:submit=on_submit>
                            <FormField form=form field=Field::Email input_type="email" placeholder="Email address"/>
                            <FormField
                                form=form
                                field=Field::Password
                                input_type="password"
                                placeholder="Password"
                                revealable=true
                            />
                            <div class="login-form__options">
                                <label class="login-remember">
                                    <input
                                        type="checkbox"
                                        name="remember"
                                        prop:checked=move || form.with(LoginForm::remember)
                                        on:change=move |ev| form.update(|f| f.set_remember(event_target_checked(&ev)))
                                    />
                                    "Remember Me"
                                </label>
                                <a href="#" class="login-form__forgot">"Forgot password"</a>
                            </div>
                            <button
                                class="login-button login-button--primary"
                                type="submit"
                                disabled=move || form.with(|f| f.status() == FormStatus::Submitting)
                            >
                                "Sign in"
                                <span class="login-button__icon" aria-hidden="true">"→"</span>
                            </button>
                        </form>
                        <Show when=move || !info.get().is_empty()>
                            <p class="login-message">{move || info.get()}</p>
                        </Show>
                        <div class="login-divider">
                            <span>"or"</span>
                        </div>
                        <div class="login-social">
                            <button type="button" class="login-button login-button--social">
                                <span class="login-social__icon login-social__icon--facebook" aria-hidden="true">"f"</span>
                                "Sign in with Facebook"
                            </button>
                            <button type="button" class="login-button login-button--social">
                                <span class="login-social__icon login-social__icon--google" aria-hidden="true">"G"</span>
                                "Sign in with Google"
                            </button>
                        </div>
                    </div>
                </div>
            </section>
            <ShowcasePanel/>
        </div>
    }
}
