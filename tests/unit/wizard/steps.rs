use super::*;

#[test]
fn only_the_last_step_is_display_only() {
    let (last, rest) = BOOKING_STEPS.split_last().unwrap();
    assert!(last.is_display_only());
    assert!(rest.iter().all(|s| !s.is_display_only()));
}

#[test]
fn fields_belong_to_one_step_at_most() {
    for field in Field::ALL {
        let owners = BOOKING_STEPS
            .iter()
            .filter(|s| s.fields.contains(&field))
            .count();
        assert!(owners <= 1, "{field} listed twice");
    }
    assert_eq!(step_of(&BOOKING_STEPS, Field::TicketUnit), Some(0));
    assert_eq!(step_of(&BOOKING_STEPS, Field::AttendeeEmail), Some(1));
    assert_eq!(step_of(&BOOKING_STEPS, Field::SpecialRequest), Some(1));
}
