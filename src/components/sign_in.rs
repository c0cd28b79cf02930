use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::shared::ErrorMessage;
use crate::hooks::UseSessionHandle;

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let session = use_context::<UseSessionHandle>();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let signing_in = session
        .as_ref()
        .map(|session| session.state.signing_in)
        .unwrap_or(false);
    let error = session
        .as_ref()
        .and_then(|session| session.state.sign_in_error.clone());

    let on_submit = {
        let (email_ref, password_ref) = (email_ref.clone(), password_ref.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(session) = &session else {
                log::warn!("⚠️ Sign in sin contexto de sesión");
                return;
            };
            // Sin validación local: el servidor decide
            if let (Some(email), Some(password)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                session.sign_in.emit((email.value(), password.value()));
            }
        })
    };

    let button_class = classes!("button", "is-link", "is-fullwidth", signing_in.then_some("is-loading"));

    html! {
        <section class="section">
            <div class="columns is-centered">
                <div class="column is-4">
                    <p class="is-size-3 block">{ "Sign In" }</p>
                    <form class="box" onsubmit={on_submit}>
                        <div class="field">
                            <label class="label" for="email">{ "Email" }</label>
                            <div class="control">
                                <input class="input" type="email" id="email" ref={email_ref} disabled={signing_in} />
                            </div>
                        </div>
                        <div class="field">
                            <label class="label" for="password">{ "Password" }</label>
                            <div class="control">
                                <input class="input" type="password" id="password" ref={password_ref} disabled={signing_in} />
                            </div>
                        </div>
                        <button type="submit" class={button_class} disabled={signing_in}>{ "Sign In" }</button>
                        <ErrorMessage message={error} />
                    </form>
                </div>
            </div>
        </section>
    }
}
