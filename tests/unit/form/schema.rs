use super::*;
use crate::form::values::TicketType;

fn filled() -> FormValues {
    FormValues {
        ticket_type: Some(TicketType::Vip),
        ticket_unit: Some(2),
        attendee_name: "Ada".to_string(),
        attendee_email: "ada@example.com".to_string(),
        special_request: String::new(),
        profile_image_ref: "blob:ticket-wizard/00ff".to_string(),
    }
}

#[test]
fn filled_form_passes_every_field() {
    let v = filled();
    for field in Field::ALL {
        assert!(validate_field(field, &v).is_valid(), "{field} failed");
    }
    assert!(validate_fields(&Field::ALL, &v).is_empty());
}

#[test]
fn missing_ticket_type_has_message() {
    let mut v = filled();
    v.ticket_type = None;
    let check = validate_field(Field::TicketType, &v);
    assert_eq!(check.message.as_deref(), Some("Select a ticket type!"));
}

#[test]
fn ticket_unit_must_be_present_and_in_range() {
    let mut v = filled();
    v.ticket_unit = None;
    assert!(!validate_field(Field::TicketUnit, &v).is_valid());
    v.ticket_unit = Some(0);
    assert!(!validate_field(Field::TicketUnit, &v).is_valid());
    v.ticket_unit = Some(4);
    assert!(!validate_field(Field::TicketUnit, &v).is_valid());
    v.ticket_unit = Some(3);
    assert!(validate_field(Field::TicketUnit, &v).is_valid());
}

#[test]
fn name_rules() {
    let mut v = filled();
    v.attendee_name = "   ".to_string();
    assert_eq!(
        validate_field(Field::AttendeeName, &v).message.as_deref(),
        Some("Enter your full name please!")
    );
    v.attendee_name = "é".repeat(80);
    assert!(validate_field(Field::AttendeeName, &v).is_valid());
    v.attendee_name = "a".repeat(81);
    assert!(!validate_field(Field::AttendeeName, &v).is_valid());
}

#[test]
fn email_rules() {
    let mut v = filled();
    v.attendee_email.clear();
    assert_eq!(
        validate_field(Field::AttendeeEmail, &v).message.as_deref(),
        Some("Email field cannot be empty!")
    );
    v.attendee_email = "ada.example.com".to_string();
    assert_eq!(
        validate_field(Field::AttendeeEmail, &v).message.as_deref(),
        Some("Email format is not valid!")
    );
}

#[test]
fn email_shape_examples() {
    for ok in ["a@b.co", "first.last+tag@sub.example.org", "x_y@my-host.io"] {
        assert!(is_email_shaped(ok), "{ok}");
    }
    for bad in [
        "plain",
        "@example.com",
        "a@",
        "a@localhost",
        "a@@b.com",
        "a b@c.com",
        ".a@b.com",
        "a..b@c.com",
        "a@-b.com",
        "a@b.c",
        "a@b.123",
    ] {
        assert!(!is_email_shaped(bad), "{bad}");
    }
}

#[test]
fn profile_image_needs_a_uri() {
    let mut v = filled();
    v.profile_image_ref.clear();
    assert_eq!(
        validate_field(Field::ProfileImageRef, &v).message.as_deref(),
        Some("Profile Image field cannot be empty!")
    );
    v.profile_image_ref = "avatar.png".to_string();
    assert_eq!(
        validate_field(Field::ProfileImageRef, &v).message.as_deref(),
        Some("Upload your Image please!")
    );
    assert!(is_uri_shaped("https://cdn.example.com/a.png"));
    assert!(is_uri_shaped("data:image/png;base64,AAAA"));
    assert!(!is_uri_shaped("1http://x"));
}

#[test]
fn only_listed_fields_are_validated() {
    let v = FormValues {
        ticket_type: Some(TicketType::Regular),
        ..FormValues::default()
    };
    let errs = validate_fields(&[Field::TicketType, Field::TicketUnit], &v);
    assert!(errs.is_empty());

    let errs = validate_fields(&[Field::AttendeeName, Field::AttendeeEmail], &v);
    assert_eq!(errs.len(), 2);
    assert!(errs.contains_key(&Field::AttendeeName));
    assert!(!errs.contains_key(&Field::TicketType));
}

#[test]
fn length_limits_keep_the_code_payload_bounded() {
    let mut v = filled();
    v.special_request = "x".repeat(MAX_REQUEST_CHARS);
    assert!(validate_field(Field::SpecialRequest, &v).is_valid());
    v.special_request.push('x');
    assert_eq!(
        validate_field(Field::SpecialRequest, &v).message.as_deref(),
        Some("Special request must be at most 250 characters!")
    );

    v.profile_image_ref = format!("blob:{}", "a".repeat(MAX_IMAGE_REF_CHARS));
    assert_eq!(
        validate_field(Field::ProfileImageRef, &v).message.as_deref(),
        Some("Image reference is too long!")
    );
    assert!(!is_uri_shaped("blob:a\u{1}b"));

    let local = "a".repeat(64);
    let domain = format!("{}.{}.com", "b".repeat(63), "c".repeat(63));
    let email = format!("{local}@{domain}");
    assert!(email.len() <= MAX_EMAIL_CHARS);
    assert!(is_email_shaped(&email));
    let too_long = format!("{local}@{}.{domain}", "d".repeat(63));
    assert!(too_long.len() > MAX_EMAIL_CHARS);
    assert!(!is_email_shaped(&too_long));
}
