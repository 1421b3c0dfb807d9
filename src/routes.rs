//! Static route table mapping URL paths to named views.
//!
//! The table is data, not logic: five named views, each with a stable path,
//! plus a root redirect to the airlines view. `resolve` is the single
//! lookup used for nav-link highlighting; the `<Router>` in `app.rs` wires
//! the same paths to page components and owns the not-found fallback.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// The views reachable through the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Airlines,
    Flights,
    Passengers,
    Rates,
    Tickets,
}

impl View {
    /// All views, in navigation order.
    pub const ALL: [View; 5] = [
        View::Airlines,
        View::Flights,
        View::Passengers,
        View::Rates,
        View::Tickets,
    ];

    /// URL path of this view.
    pub fn path(self) -> &'static str {
        match self {
            View::Airlines => "/airlines",
            View::Flights => "/flights",
            View::Passengers => "/passengers",
            View::Rates => "/rates",
            View::Tickets => "/tickets",
        }
    }

    /// Human-readable title shown in the nav bar.
    pub fn title(self) -> &'static str {
        match self {
            View::Airlines => "Airlines",
            View::Flights => "Flights",
            View::Passengers => "Passengers",
            View::Rates => "Rates",
            View::Tickets => "Tickets",
        }
    }
}

/// Resolve a URL path to a view.
///
/// The root path redirects to [`View::Airlines`] and therefore resolves to
/// it. Unknown paths resolve to `None` and fall through to the router's
/// not-found view.
pub fn resolve(path: &str) -> Option<View> {
    if path == "/" {
        return Some(View::Airlines);
    }
    View::ALL.into_iter().find(|view| view.path() == path)
}
