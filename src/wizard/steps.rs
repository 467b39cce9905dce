use crate::form::values::Field;

/// One screen of the wizard and the fields it must validate before moving on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepDefinition {
    /// Short identifier ("Step 1").
    pub id: &'static str,
    /// Title shown in the header.
    pub display_name: &'static str,
    /// Fields validated when leaving this step; empty for the terminal step.
    pub fields: &'static [Field],
}

impl StepDefinition {
    /// `true` for display-only steps.
    pub fn is_display_only(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Ticket selection, attendee details, ticket receipt.
pub const BOOKING_STEPS: [StepDefinition; 3] = [
    StepDefinition {
        id: "Step 1",
        display_name: "Ticket Selection",
        fields: &[Field::TicketType, Field::TicketUnit],
    },
    StepDefinition {
        id: "Step 2",
        display_name: "Attendee Details",
        fields: &[
            Field::ProfileImageRef,
            Field::AttendeeName,
            Field::AttendeeEmail,
            Field::SpecialRequest,
        ],
    },
    StepDefinition {
        id: "Step 3",
        display_name: "Ready",
        fields: &[],
    },
];

/// Step whose fields include `field`.
pub fn step_of(steps: &[StepDefinition], field: Field) -> Option<usize> {
    steps.iter().position(|s| s.fields.contains(&field))
}

#[cfg(test)]
#[path = "../../tests/unit/wizard/steps.rs"]
mod tests;
