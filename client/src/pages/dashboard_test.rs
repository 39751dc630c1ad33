use super::*;
use crate::session::Claims;

fn signed_in(role: Role) -> AuthState {
    let user = Claims { username: "ndiaye".into(), role, ..Claims::default() };
    AuthState { user: Some(user), loading: false }
}

#[test]
fn client_dashboard_shows_own_matters_only() {
    assert_eq!(dashboard_cards(Some(Role::Client)), &[Registry::Cases, Registry::Documents]);
}

#[test]
fn staff_dashboard_covers_firm_registries() {
    for role in [Some(Role::Admin), Some(Role::Lawyer), Some(Role::Secretary), None] {
        assert_eq!(dashboard_cards(role).len(), 4, "{role:?}");
        assert!(dashboard_cards(role).contains(&Registry::Deadlines));
    }
}

#[test]
fn greeting_depends_on_role() {
    assert_eq!(greeting(&signed_in(Role::Lawyer)), "Welcome back, ndiaye.");
    assert!(greeting(&signed_in(Role::Client)).starts_with("Welcome, ndiaye."));
}

#[test]
fn every_card_links_to_its_route() {
    for registry in Registry::ALL {
        assert!(registry_path(registry).starts_with('/'));
    }
    assert_eq!(registry_path(Registry::Deadlines), "/agenda");
    assert_eq!(registry_path(Registry::Tasks), "/tasks");
}
