//! Airlines view: the list of airline companies.

use leptos::prelude::*;

use crate::net::types::Airline;

/// Airlines page — fetches the airline list on mount and renders it.
#[component]
pub fn AirlinesPage() -> impl IntoView {
    let airlines = LocalResource::new(|| crate::net::api::fetch_airlines());

    view! {
        <section class="page">
            <h1>"Airlines"</h1>
            <Suspense fallback=move || view! { <p>"Loading airlines..."</p> }>
                {move || {
                    airlines
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) => view! { <AirlineTable list=list/> }.into_any(),
                            None => {
                                view! { <p class="page__error">"Could not load airlines."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn AirlineTable(list: Vec<Airline>) -> impl IntoView {
    view! {
        <table class="entity-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|airline| {
                        view! {
                            <tr>
                                <td>{airline.name}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
