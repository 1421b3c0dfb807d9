//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::net::types::UserInfo;
use crate::pages::{
    airlines::AirlinesPage, flights::FlightsPage, passengers::PassengersPage, rates::RatesPage,
    tickets::TicketsPage,
};

/// Root application component.
///
/// Creates the session store, fires the initial auth check, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session store: one record for the whole tab, shared via context.
    let user_info = RwSignal::new(UserInfo::default());
    provide_context(user_info);

    // Establish the initial auth state from the server's answer instead of
    // trusting the hardcoded default. Runs once, before children render.
    #[cfg(feature = "web")]
    leptos::task::spawn_local(async move {
        crate::state::session::check_login(user_info).await;
    });

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Airline Manager"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("airlines") view=AirlinesPage/>
                    <Route path=StaticSegment("flights") view=FlightsPage/>
                    <Route path=StaticSegment("passengers") view=PassengersPage/>
                    <Route path=StaticSegment("rates") view=RatesPage/>
                    <Route path=StaticSegment("tickets") view=TicketsPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/airlines"/> }/>
                </Routes>
            </main>
        </Router>
    }
}
