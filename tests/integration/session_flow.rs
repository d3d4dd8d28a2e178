use contactbook::config::default_seed_contacts;
use contactbook::session::{AlwaysConfirm, SearchOutcome};
use contactbook::{ApiError, ContactBook, ContactForm, NoticeLevel, VizToken};

fn seeded() -> ContactBook {
    let mut book = ContactBook::new();
    book.seed(default_seed_contacts());
    book
}

fn names(book: &ContactBook) -> Vec<String> {
    book.contacts().iter().map(|c| c.name.clone()).collect()
}

#[test]
fn add_edit_delete_round() {
    let mut book = seeded();

    book.submit(&ContactForm::new("Lucía Torres", "222-333-4444", "lucia@example.com"))
        .unwrap();
    assert_eq!(book.count(), 6);

    let (mut form, _) = book.begin_edit("Lucía Torres").unwrap();
    form.email = String::new();
    book.submit(&form).unwrap();
    assert_eq!(book.contacts()[5].email, None);

    let notice = book
        .delete("Lucía Torres", &mut AlwaysConfirm)
        .unwrap()
        .unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(book.count(), 5);
    assert!(!names(&book).contains(&"Lucía Torres".to_string()));
}

#[test]
fn edit_keeps_neighbors_in_visualization() {
    let mut book = seeded();
    let (mut form, _) = book.begin_edit("Carlos López").unwrap();
    form.phone = "999".to_string();
    book.submit(&form).unwrap();

    let viz = book.visualization();
    assert_eq!(viz[4], VizToken::Name("Carlos López".to_string()));
    assert_eq!(viz[2], VizToken::Name("María García".to_string()));
    assert_eq!(viz[6], VizToken::Name("Ana Martínez".to_string()));
}

#[test]
fn duplicate_check_also_hits_phone_fragments() {
    let mut book = seeded();
    // "555" is not a name in the book, but it is part of two phone numbers.
    let err = book.submit(&ContactForm::new("555", "000", "")).unwrap_err();
    assert!(matches!(err, ApiError::DuplicateName(_)));
}

#[test]
fn deleting_missing_contact_reports_success_without_effect() {
    let mut book = seeded();
    let notice = book.delete("Nobody", &mut AlwaysConfirm).unwrap();
    assert!(notice.is_some());
    assert_eq!(book.count(), 5);
}

#[test]
fn search_modes() {
    let book = seeded();
    let SearchOutcome::Hits(similar) = book.search("juan", true) else {
        panic!("expected hits");
    };
    assert_eq!(similar.len(), 2);

    let SearchOutcome::Hits(exact) = book.search("juan", false) else {
        panic!("expected hits");
    };
    assert!(exact.is_empty());

    let SearchOutcome::Hits(phone) = book.search("098-765-4321", false) else {
        panic!("expected hits");
    };
    assert_eq!(phone.len(), 1);
    assert_eq!(phone[0].contact.name, "María García");
}
