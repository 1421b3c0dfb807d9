//! Flights view: the scheduled flight list.

use leptos::prelude::*;

use crate::net::types::Flight;

/// Flights page — fetches the flight list on mount and renders it.
#[component]
pub fn FlightsPage() -> impl IntoView {
    let flights = LocalResource::new(|| crate::net::api::fetch_flights());

    view! {
        <section class="page">
            <h1>"Flights"</h1>
            <Suspense fallback=move || view! { <p>"Loading flights..."</p> }>
                {move || {
                    flights
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) => view! { <FlightTable list=list/> }.into_any(),
                            None => {
                                view! { <p class="page__error">"Could not load flights."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn FlightTable(list: Vec<Flight>) -> impl IntoView {
    view! {
        <table class="entity-table">
            <thead>
                <tr>
                    <th>"Flight"</th>
                    <th>"Route"</th>
                    <th>"Price"</th>
                    <th>"Departure"</th>
                    <th>"Arrival"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|flight| {
                        view! {
                            <tr>
                                <td>{flight.name}</td>
                                <td>{flight.route}</td>
                                <td>{flight.price}</td>
                                <td>{flight.departure_time}</td>
                                <td>{flight.arrival_time}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
