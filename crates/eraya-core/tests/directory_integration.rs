//! Integration tests for the directory flow through the public API.

use chrono::NaiveDate;
use eraya_core::directory::{BookingField, Notice, UNAVAILABLE_NOTICE};
use eraya_core::{
    BookingValidationError, CategoryFilter, CloseReason, Config, DirectoryController,
    DirectoryEvent, DirectoryStore, ModalState, ModalView, Provider, RecordingHost, Specialty,
    TimeSlot,
};

fn provider(id: u32, name: &str, specialty: &str, available: bool) -> Provider {
    Provider {
        id,
        name: name.into(),
        specialty: Specialty::from(specialty),
        avatar: "👩‍⚕️".into(),
        rating: 4.0,
        reviews: 12,
        experience_years: 7,
        location: "Coimbatore".into(),
        hospital: "KG Hospital".into(),
        phone: "+91 90000 0000".into(),
        email: format!("doc{id}@kg.in"),
        available,
        consultation_fee: "₹650".into(),
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn example_controller() -> DirectoryController<RecordingHost> {
    let store = DirectoryStore::from_providers(vec![
        provider(1, "Dr. A", "gynecologist", true),
        provider(2, "Dr. B", "pcos", false),
    ])
    .unwrap();
    let settings = Config::default().directory_settings();
    DirectoryController::new(store, settings, RecordingHost::new()).with_today(today())
}

#[test]
fn test_filter_search_and_booking_example() {
    let mut c = example_controller();
    c.init();

    c.apply_filter("pcos".parse::<CategoryFilter>().unwrap());
    assert_eq!(c.host().mounted_ids(), vec![2]);

    c.apply_search("dr. a");
    assert_eq!(c.host().mounted_ids(), vec![1]);

    // Unavailable provider: notice, no modal.
    c.book(2).unwrap();
    assert!(c.host().modal.is_none());
    assert_eq!(c.host().notices, vec![Notice::warning(UNAVAILABLE_NOTICE)]);

    // Available provider: form, then confirmation.
    c.book(1).unwrap();
    assert!(matches!(c.host().modal, Some(ModalView::Booking(_))));
    c.update_draft(|d| {
        d.name = "Meena".into();
        d.phone = "9123456780".into();
        d.date = Some(today());
        d.time_slot = Some(TimeSlot::Nine);
        d.reason = Some("Irregular cycle".into());
    });
    let event = c.submit_booking().unwrap();
    match event {
        DirectoryEvent::BookingConfirmed { message, provider_id, .. } => {
            assert_eq!(provider_id, 1);
            assert!(message.contains("Dr. A"));
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(c.host().modal.is_none());
    assert_eq!(c.modal_state(), &ModalState::Closed);
}

#[test]
fn test_missing_fields_then_fix_and_submit() {
    let mut c = example_controller();
    c.book(1).unwrap();

    c.update_draft(|d| d.phone = "9123456780".into());
    let err = c.submit_booking().unwrap_err();
    assert_eq!(
        err,
        BookingValidationError::MissingFields(vec![
            BookingField::Name,
            BookingField::Date,
            BookingField::TimeSlot
        ])
    );

    c.update_draft(|d| {
        d.name = "Meena".into();
        d.date = today().succ_opt();
        d.time_slot = Some(TimeSlot::Sixteen);
    });
    assert!(c.submit_booking().is_ok());
}

#[test]
fn test_past_date_blocks_submission() {
    let mut c = example_controller();
    c.book(1).unwrap();
    c.update_draft(|d| {
        d.name = "Meena".into();
        d.phone = "9123456780".into();
        d.date = NaiveDate::from_ymd_opt(2026, 1, 1);
        d.time_slot = Some(TimeSlot::Ten);
    });
    assert!(matches!(
        c.submit_booking(),
        Err(BookingValidationError::DateInPast { .. })
    ));
    assert!(c.modal_state().is_open());
}

#[test]
fn test_seeded_directory_contact_flow() {
    let mut c = DirectoryController::new(
        DirectoryStore::seeded(),
        Config::default().directory_settings(),
        RecordingHost::new(),
    );
    c.init();
    c.contact(5).unwrap();
    let Some(ModalView::Contact(view)) = c.host().modal.clone() else {
        panic!("contact modal expected");
    };
    assert_eq!(view.email.label, "arun.verma@mindcare.com");
    assert_eq!(view.hospital, "Mind Care Center");

    c.close_modal(CloseReason::CloseButton).unwrap();
    assert!(c.host().modal.is_none());
    assert_eq!(c.host().disposed, 1);
}

#[test]
fn test_compose_setting_changes_search_semantics() {
    let mut cfg = Config::default();
    let key = "directory.compose_search_with_filter";
    cfg.update(key, "true").unwrap();
    let mut c = DirectoryController::new(
        DirectoryStore::seeded(),
        cfg.directory_settings(),
        RecordingHost::new(),
    );
    c.apply_filter(CategoryFilter::Only(Specialty::Gynecologist));
    c.apply_search("apollo");
    assert_eq!(c.host().mounted_ids(), vec![1, 6]);
    c.apply_search("cmc");
    assert!(c.host().mounted_ids().is_empty());
}
