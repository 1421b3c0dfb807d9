//! Passengers view: the current user's passengers.

use leptos::prelude::*;

use crate::net::types::Passenger;

/// Passengers page — fetches the passenger list on mount and renders it.
/// The backend scopes the list to the authenticated user.
#[component]
pub fn PassengersPage() -> impl IntoView {
    let passengers = LocalResource::new(|| crate::net::api::fetch_passengers());

    view! {
        <section class="page">
            <h1>"Passengers"</h1>
            <Suspense fallback=move || view! { <p>"Loading passengers..."</p> }>
                {move || {
                    passengers
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) => view! { <PassengerTable list=list/> }.into_any(),
                            None => {
                                view! { <p class="page__error">"Could not load passengers."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn PassengerTable(list: Vec<Passenger>) -> impl IntoView {
    view! {
        <table class="entity-table">
            <thead>
                <tr>
                    <th>"Full name"</th>
                    <th>"Passport"</th>
                    <th>"Phone"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|passenger| {
                        view! {
                            <tr>
                                <td>{passenger.full_name}</td>
                                <td>{passenger.passport}</td>
                                <td>{passenger.phone}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
