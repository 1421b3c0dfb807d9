//! Top navigation bar: route links plus the session controls.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::login_form::LoginForm;
use crate::net::types::UserInfo;
use crate::routes::{self, View};

/// Navigation bar listing the five views and hosting the login form or
/// logout button, depending on the current auth state.
#[component]
pub fn Navbar() -> impl IntoView {
    let user_info = expect_context::<RwSignal<UserInfo>>();
    let location = use_location();
    let active = Memo::new(move |_| routes::resolve(&location.pathname.get()));

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            crate::state::session::logout(user_info).await;
        });
        #[cfg(not(feature = "web"))]
        let _ = user_info;
    };

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Airline Manager"</span>
            <ul class="navbar__links">
                {View::ALL
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <li class=("navbar__link--active", move || active.get() == Some(entry))>
                                <A href=entry.path()>{entry.title()}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <div class="navbar__session">
                <Show
                    when=move || user_info.get().is_authenticated
                    fallback=|| view! { <LoginForm/> }
                >
                    <button class="btn" on:click=on_logout>
                        "Log out"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
