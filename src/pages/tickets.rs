//! Tickets view: the current user's booked tickets.

use leptos::prelude::*;

use crate::net::types::Ticket;

/// Tickets page — fetches the ticket list on mount and renders it with the
/// denormalized flight/passenger/rate names the backend provides.
#[component]
pub fn TicketsPage() -> impl IntoView {
    let tickets = LocalResource::new(|| crate::net::api::fetch_tickets());

    view! {
        <section class="page">
            <h1>"Tickets"</h1>
            <Suspense fallback=move || view! { <p>"Loading tickets..."</p> }>
                {move || {
                    tickets
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) => view! { <TicketTable list=list/> }.into_any(),
                            None => {
                                view! { <p class="page__error">"Could not load tickets."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn TicketTable(list: Vec<Ticket>) -> impl IntoView {
    view! {
        <table class="entity-table">
            <thead>
                <tr>
                    <th>"Flight"</th>
                    <th>"Passenger"</th>
                    <th>"Rate"</th>
                    <th>"Seat"</th>
                    <th>"Booked"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|ticket| {
                        view! {
                            <tr>
                                <td>{ticket.flight_name}</td>
                                <td>{ticket.passenger_name}</td>
                                <td>{ticket.rate_name}</td>
                                <td>{ticket.seat}</td>
                                <td>{ticket.booking_date}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
