use super::*;

#[test]
fn console_tabs_cover_every_resource_group() {
    let labels: Vec<&str> = ConsoleTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["auth", "user", "kyc", "health", "admin"]);
}

#[test]
fn console_default_tab_is_auth() {
    assert_eq!(ConsoleTab::default(), ConsoleTab::Auth);
}
