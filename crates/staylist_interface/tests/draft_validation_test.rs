//! Tests for draft validation and the field-keyed error maps.

use staylist_core::RoomKind;
use staylist_interface::{AmenityDraft, ReviewDraft, RoomDraft, RoomPatch, SignupDraft};

fn room_draft() -> RoomDraft {
    serde_json::from_value(serde_json::json!({
        "name": "Seaside loft",
        "country": "Portugal",
        "city": "Lisbon",
        "price": 120,
        "rooms": 2,
        "toilets": 1,
        "description": "Bright loft two blocks from the water.",
        "address": "12 Rua das Flores",
        "pet_friendly": true,
        "kind": "entire_place",
        "category": 1,
        "amenities": [1, 2]
    }))
    .unwrap()
}

#[test]
fn full_room_draft_validates() {
    let room = room_draft().validated().unwrap();
    assert_eq!(room.name, "Seaside loft");
    assert_eq!(room.kind, RoomKind::EntirePlace);
    assert_eq!(room.amenities, vec![1, 2]);
    assert!(room.pet_friendly);
}

#[test]
fn missing_fields_are_reported_per_field() {
    let err = RoomDraft::default().validated().unwrap_err();
    for field in ["name", "country", "city", "price", "description", "kind"] {
        assert_eq!(
            err.errors[field],
            vec!["This field is required."],
            "missing message for {field}"
        );
    }
}

#[test]
fn bad_kind_is_a_choice_error() {
    let mut draft = room_draft();
    draft.kind = Some("castle".to_string());
    let err = draft.validated().unwrap_err();
    assert_eq!(err.errors["kind"], vec!["\"castle\" is not a valid choice."]);
}

#[test]
fn negative_price_is_rejected() {
    let mut draft = room_draft();
    draft.price = Some(-5);
    let err = draft.validated().unwrap_err();
    assert_eq!(
        err.errors["price"],
        vec!["Ensure this value is greater than or equal to 0."]
    );
}

#[test]
fn patch_only_checks_provided_fields() {
    let patch = RoomPatch {
        price: Some(90),
        ..RoomPatch::default()
    };
    let changes = patch.validated().unwrap();
    assert_eq!(changes.price, Some(90));
    assert_eq!(changes.name, None);

    let bad = RoomPatch {
        name: Some("   ".to_string()),
        ..RoomPatch::default()
    };
    let err = bad.validated().unwrap_err();
    assert_eq!(err.errors["name"], vec!["This field may not be blank."]);
}

#[test]
fn amenity_name_is_required_and_bounded() {
    let err = AmenityDraft::default().validated().unwrap_err();
    assert_eq!(err.errors["name"], vec!["This field is required."]);

    let long = AmenityDraft {
        name: Some("x".repeat(151)),
        description: None,
    };
    let err = long.validated().unwrap_err();
    assert_eq!(
        err.errors["name"],
        vec!["Ensure this field has no more than 150 characters."]
    );
}

#[test]
fn review_rating_is_bounded() {
    let low = ReviewDraft {
        payload: Some("fine".to_string()),
        rating: Some(0),
    };
    assert!(low.validated().is_err());

    let high = ReviewDraft {
        payload: Some("fine".to_string()),
        rating: Some(6),
    };
    let err = high.validated().unwrap_err();
    assert_eq!(
        err.errors["rating"],
        vec!["Ensure this value is less than or equal to 5."]
    );

    let ok = ReviewDraft {
        payload: Some("fine".to_string()),
        rating: Some(5),
    };
    assert_eq!(ok.validated().unwrap().rating, 5);
}

#[test]
fn short_password_is_rejected() {
    let draft = SignupDraft {
        username: Some("ada".to_string()),
        email: Some("ada@example.com".to_string()),
        password: Some("short".to_string()),
    };
    let err = draft.validated().unwrap_err();
    assert_eq!(
        err.errors["password"],
        vec!["Ensure this field has at least 8 characters."]
    );
}
