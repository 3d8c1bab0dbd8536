//! Text input bound to one `LoginForm` field, with its error line.
//!
//! Every keystroke writes through `LoginForm::set_value`, which re-runs the
//! field's rule; the error line is derived from that state.

use leptos::prelude::*;

use crate::state::login_form::LoginForm;
use crate::util::validation::Field;

#[component]
pub fn FormField(
    form: RwSignal<LoginForm>,
    field: Field,
    #[prop(into)] input_type: String,
    #[prop(into)] placeholder: String,
    /// Render a show/hide toggle that swaps the input to plain text.
    #[prop(optional)]
    revealable: bool,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let error_text = move || form.with(|f| f.error(field).map(|e| e.message.clone()));
    let has_error = move || form.with(|f| f.error(field).is_some());
    let reveal_title = move || if revealed.get() { "Hide password" } else { "Show password" };
    let reveal_label = move || if revealed.get() { "Hide" } else { "Show" };
    let current_type = move || {
        if revealable && revealed.get() {
            "text".to_owned()
        } else {
            input_type.clone()
        }
    };

    view! {
        <div class="login-field" class:login-field--error=has_error>
            <div class="login-field__control">
                <input
                    class="login-input"
                    id=field.name()
                    name=field.name()
                    type=current_type
                    placeholder=placeholder
                    prop:value=move || form.with(|f| f.value(field).to_owned())
                    on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                />
                {revealable
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="login-field__reveal"
                                title=reveal_title
                                on:click=move |_| revealed.update(|r| *r = !*r)
                            >
                                {reveal_label}
                            </button>
                        }
                    })}
            </div>
            {move || error_text().map(|msg| view! { <p class="login-field__error">{msg}</p> })}
        </div>
    }
}
