use super::*;

#[test]
fn single_arrival_names_the_notification() {
    assert_eq!(arrival_message(1, "Audience demain"), "New notification: Audience demain");
}

#[test]
fn untitled_or_several_arrivals_are_counted() {
    assert_eq!(arrival_message(1, ""), "1 new notifications");
    assert_eq!(arrival_message(3, "Audience demain"), "3 new notifications");
}
