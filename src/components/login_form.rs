//! Inline login form shown in the navbar while logged out.

use leptos::prelude::*;

use crate::net::types::UserInfo;

/// Username/password form. Submitting calls the session store's `login`
/// action; a failed credential submission is the one error this layer
/// shows the user.
#[component]
pub fn LoginForm() -> impl IntoView {
    let user_info = expect_context::<RwSignal<UserInfo>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        let pass = password.get();
        if name.trim().is_empty() {
            return;
        }

        #[cfg(feature = "web")]
        {
            let name = name.trim().to_owned();
            leptos::task::spawn_local(async move {
                match crate::state::session::login(user_info, &name, &pass).await {
                    Ok(()) => {
                        error.set(None);
                        password.set(String::new());
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (user_info, name, pass);
        }
    };

    view! {
        <form class="login-form" on:submit=submit>
            <input
                class="login-form__input"
                type="text"
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                class="login-form__input"
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">
                "Log in"
            </button>
            {move || {
                error
                    .get()
                    .map(|msg| view! { <span class="login-form__error">{msg}</span> })
            }}
        </form>
    }
}
