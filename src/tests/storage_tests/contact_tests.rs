// Contact and search filter tests

use crate::storage::{filter_contacts, Contact};

fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("1", "John Doe", "+1234567890").with_status("Available"),
        Contact::new("2", "Sarah Wilson", "+1234567891").with_status("Busy"),
        Contact::new("3", "Mike Johnson", "+1234567892"),
    ]
}

fn ids(contacts: &[&Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.id.clone()).collect()
}

#[test]
fn test_filter_by_name_ignores_case() {
    let contacts = sample_contacts();

    assert_eq!(ids(&filter_contacts(&contacts, "JOHN")), vec!["1", "3"]);
    assert_eq!(ids(&filter_contacts(&contacts, "sarah")), vec!["2"]);
    assert_eq!(ids(&filter_contacts(&contacts, "wIlS")), vec!["2"]);
}

#[test]
fn test_filter_by_phone_substring() {
    let contacts = sample_contacts();

    assert_eq!(ids(&filter_contacts(&contacts, "891")), vec!["2"]);
    assert_eq!(ids(&filter_contacts(&contacts, "+123456789")), vec!["1", "2", "3"]);
}

#[test]
fn test_filter_empty_query_returns_everything() {
    let contacts = sample_contacts();

    assert_eq!(filter_contacts(&contacts, "").len(), 3);
}

#[test]
fn test_filter_no_match_returns_empty() {
    let contacts = sample_contacts();

    assert!(filter_contacts(&contacts, "zelda").is_empty());
    assert!(filter_contacts(&contacts, "999").is_empty());
}

#[test]
fn test_filter_results_only_contain_matches() {
    let contacts = sample_contacts();

    for query in ["o", "Doe", "892", "n J"] {
        for contact in filter_contacts(&contacts, query) {
            assert!(
                contact.name.to_lowercase().contains(&query.to_lowercase())
                    || contact.phone_number.contains(query),
                "{} should not match {}",
                contact.name,
                query
            );
        }
    }
}

#[test]
fn test_subtitle_falls_back_to_phone() {
    let contacts = sample_contacts();

    assert_eq!(contacts[0].subtitle(), "Available");
    assert_eq!(contacts[2].subtitle(), "+1234567892");

    let blank_status = Contact::new("4", "Ann", "+100").with_status("");
    assert_eq!(blank_status.subtitle(), "+100");
}

#[test]
fn test_new_local_contacts_get_unique_ids() {
    let a = Contact::new_local("Ann", "+100");
    let b = Contact::new_local("Ann", "+100");

    assert_ne!(a.id, b.id);
    assert_eq!(a.name, "Ann");
    assert_eq!(a.phone_number, "+100");
    assert!(a.status_message.is_none());
    assert!(!a.is_online);
}
