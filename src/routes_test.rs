use super::*;

// =============================================================
// Route table lookup
// =============================================================

#[test]
fn each_path_resolves_to_its_own_view() {
    for view in View::ALL {
        assert_eq!(resolve(view.path()), Some(view));
    }
}

#[test]
fn view_paths_are_distinct() {
    for (i, a) in View::ALL.into_iter().enumerate() {
        for b in View::ALL.into_iter().skip(i + 1) {
            assert_ne!(a.path(), b.path());
        }
    }
}

#[test]
fn root_redirects_to_airlines() {
    assert_eq!(resolve("/"), resolve("/airlines"));
    assert_eq!(resolve("/"), Some(View::Airlines));
}

#[test]
fn unknown_paths_do_not_resolve() {
    assert_eq!(resolve("/bookings"), None);
    assert_eq!(resolve("/airlines/1"), None);
    assert_eq!(resolve(""), None);
}
