mod helpers;

use diet::cli::{forget, remember};
use helpers::{reload, test_store};

#[test]
fn remember_overwrites_previous_entry() {
    let (_tmp, mut store) = test_store();
    assert!(remember(&mut store, "egg", 78.0, "boiled").unwrap().is_none());

    let previous = remember(&mut store, "egg", 90.0, "fried").unwrap();
    assert_eq!(previous.map(|f| f.calories), Some(78.0));

    let persisted = reload(&store);
    assert_eq!(persisted.doc.food.len(), 1);
    assert_eq!(persisted.doc.food["egg"].calories, 90.0);
    assert_eq!(persisted.doc.food["egg"].description, "fried");
}

#[test]
fn remember_rejects_negative_calories() {
    let (_tmp, mut store) = test_store();
    assert!(remember(&mut store, "egg", -1.0, "").is_err());
    assert!(store.doc.food.is_empty());
    assert!(!store.path().exists());
}

#[test]
fn forget_removes_existing_food() {
    let (_tmp, mut store) = test_store();
    remember(&mut store, "egg", 78.0, "boiled").unwrap();
    remember(&mut store, "toast", 94.0, "").unwrap();

    assert!(forget(&mut store, "egg").unwrap());

    let persisted = reload(&store);
    assert!(!persisted.doc.food.contains_key("egg"));
    assert!(persisted.doc.food.contains_key("toast"));
}

#[test]
fn forget_unknown_food_does_not_write() {
    let (_tmp, mut store) = test_store();
    assert!(!forget(&mut store, "egg").unwrap());
    assert!(!store.path().exists(), "no-op forget must not create the file");
}

#[test]
fn forget_is_case_sensitive() {
    let (_tmp, mut store) = test_store();
    remember(&mut store, "Egg", 78.0, "").unwrap();
    assert!(!forget(&mut store, "egg").unwrap());
    assert!(reload(&store).doc.food.contains_key("Egg"));
}
