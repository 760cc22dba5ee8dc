//! End-to-end account lifecycle scenarios.

use zamanix_account::Directory;
use zamanix_account::user::{EventPatch, NewAddress, NewEvent, Recurrence};

use crate::helpers::{signup_data, test_store};

#[test]
fn week_of_daily_checks_accumulates_streak_bonuses() {
    let f = test_store();
    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());

    // Signup day counts as streak day 1 with the initial grant of 10.
    // Six further consecutive days pay bonuses 2..=7.
    for _ in 0..6 {
        f.clock.advance_days(1);
        f.store.check_daily_login().unwrap();
    }

    let user = f.store.current().unwrap();
    assert_eq!(user.login_streak, 7);
    assert_eq!(user.coins, 10 + (2 + 3 + 4 + 5 + 6 + 7));

    // A missed day resets both the streak and the bonus size
    f.clock.advance_days(2);
    f.store.check_daily_login().unwrap();
    let user = f.store.current().unwrap();
    assert_eq!(user.login_streak, 1);
    assert_eq!(user.coins, 10 + 27 + 1);
}

#[test]
fn profile_changes_survive_logout_and_login() {
    let f = test_store();
    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());

    f.store
        .add_address(NewAddress {
            name: "Home".to_string(),
            phone: "9876543210".to_string(),
            street: "14 MG Road".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pincode: "560001".to_string(),
            is_default: true,
        })
        .unwrap();
    f.store
        .add_event(NewEvent {
            date: "2024-06-01".to_string(),
            occasion: "Anniversary".to_string(),
            name: Some("Ravi".to_string()),
            notes: None,
            recurrence: Recurrence::Yearly,
        })
        .unwrap();
    f.store.add_coins(15).unwrap();
    f.store.logout().unwrap();

    f.clock.advance_days(1);
    assert!(f.store.login("asha@example.com", "watchword").unwrap());
    let user = f.store.current().unwrap();
    assert_eq!(user.addresses.len(), 1);
    assert_eq!(user.addresses[0].name, "Home");
    assert_eq!(user.events.as_ref().unwrap().len(), 1);
    assert_eq!(user.coins, 25);
    assert_eq!(user.login_streak, 2);
}

#[test]
fn event_edits_are_visible_after_relogin() {
    let f = test_store();
    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());

    f.store
        .add_event(NewEvent {
            date: "2024-03-10".to_string(),
            occasion: "Birthday".to_string(),
            name: None,
            notes: None,
            recurrence: Recurrence::Once,
        })
        .unwrap();
    let id = f.store.current().unwrap().events.unwrap()[0].id.clone();

    f.store
        .update_event(
            &id,
            &EventPatch {
                recurrence: Some(Recurrence::Yearly),
                notes: Some("Gift wrap".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    f.store.logout().unwrap();

    assert!(f.store.login("asha@example.com", "watchword").unwrap());
    let events = f.store.current().unwrap().events.unwrap();
    assert_eq!(events[0].recurrence, Recurrence::Yearly);
    assert_eq!(events[0].notes.as_deref(), Some("Gift wrap"));
}

#[test]
fn two_accounts_keep_separate_directory_entries() {
    let f = test_store();
    assert!(f.store.signup(signup_data("asha@example.com")).unwrap());
    f.store.add_coins(5).unwrap();
    f.store.logout().unwrap();

    assert!(f.store.signup(signup_data("ravi@example.com")).unwrap());
    f.store.add_coins(-3).unwrap();

    let directory = Directory::new(f.storage.clone()).load().unwrap();
    assert_eq!(directory.len(), 2);
    assert_eq!(directory["asha@example.com"].coins, 15);
    assert_eq!(directory["ravi@example.com"].coins, 7);
}
