//! Rates view: fare rates and their price multipliers.

use leptos::prelude::*;

use crate::net::types::Rate;

/// Rates page — fetches the rate list on mount and renders it.
#[component]
pub fn RatesPage() -> impl IntoView {
    let rates = LocalResource::new(|| crate::net::api::fetch_rates());

    view! {
        <section class="page">
            <h1>"Rates"</h1>
            <Suspense fallback=move || view! { <p>"Loading rates..."</p> }>
                {move || {
                    rates
                        .get()
                        .map(|loaded| match loaded {
                            Some(list) => view! { <RateTable list=list/> }.into_any(),
                            None => {
                                view! { <p class="page__error">"Could not load rates."</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn RateTable(list: Vec<Rate>) -> impl IntoView {
    view! {
        <table class="entity-table">
            <thead>
                <tr>
                    <th>"Rate"</th>
                    <th>"Multiplier"</th>
                </tr>
            </thead>
            <tbody>
                {list
                    .into_iter()
                    .map(|rate| {
                        view! {
                            <tr>
                                <td>{rate.name}</td>
                                <td>{rate.multiplier}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
