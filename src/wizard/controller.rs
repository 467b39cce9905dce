use chrono::{DateTime, Utc};

use crate::{
    form::{
        schema::{FieldErrors, validate_field, validate_fields},
        values::{Field, FormValues},
    },
    foundation::error::{TicketError, TicketResult},
    store::repository::TicketStore,
    ticket::record::TicketRecord,
    upload::simulator::LocalImageRef,
    wizard::steps::{BOOKING_STEPS, StepDefinition},
};

/// Current and previous step index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    /// Active step, always within `0..step_count`.
    pub current: usize,
    /// Step shown before the last transition; only drives the slide direction.
    pub previous: usize,
}

impl WizardState {
    /// Direction of the last transition.
    pub fn slide_direction(&self) -> SlideDirection {
        match self.current.cmp(&self.previous) {
            std::cmp::Ordering::Greater => SlideDirection::Forward,
            std::cmp::Ordering::Less => SlideDirection::Backward,
            std::cmp::Ordering::Equal => SlideDirection::None,
        }
    }
}

/// Which way the step content slides in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    /// Moved to a later step.
    Forward,
    /// Moved to an earlier step.
    Backward,
    /// No transition yet (or reset).
    None,
}

/// Result of [`WizardController::advance`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advance {
    /// The wizard moved one step forward.
    Moved {
        /// Step left.
        from: usize,
        /// Step entered.
        to: usize,
    },
    /// At least one declared field failed; nothing changed except the inline messages.
    Blocked {
        /// Failures of the active step's fields.
        errors: FieldErrors,
    },
    /// Already on the terminal step.
    AtEnd,
}

/// Step state machine over one shared form.
#[derive(Debug)]
pub struct WizardController<S> {
    steps: &'static [StepDefinition],
    state: WizardState,
    values: FormValues,
    errors: FieldErrors,
    ticket: Option<TicketRecord>,
    store: S,
}

impl<S: TicketStore> WizardController<S> {
    /// Booking wizard over [`BOOKING_STEPS`], persisting into `store`.
    pub fn new(store: S) -> Self {
        Self::from_parts(&BOOKING_STEPS, store)
    }

    /// Wizard over custom `steps`.
    pub fn with_steps(steps: &'static [StepDefinition], store: S) -> TicketResult<Self> {
        if steps.is_empty() {
            return Err(TicketError::validation("wizard needs at least one step"));
        }
        Ok(Self::from_parts(steps, store))
    }

    fn from_parts(steps: &'static [StepDefinition], store: S) -> Self {
        Self {
            steps,
            state: WizardState::default(),
            values: FormValues::default(),
            errors: FieldErrors::new(),
            ticket: None,
            store,
        }
    }

    /// Step indices.
    pub fn state(&self) -> WizardState {
        self.state
    }

    /// All step definitions.
    pub fn steps(&self) -> &'static [StepDefinition] {
        self.steps
    }

    /// Active step definition.
    pub fn current_step(&self) -> &'static StepDefinition {
        &self.steps[self.state.current]
    }

    /// `true` on the display-only final step.
    pub fn is_terminal(&self) -> bool {
        self.state.current + 1 == self.steps.len()
    }

    /// Header label, e.g. `Step 1/3`.
    pub fn step_label(&self) -> String {
        format!("Step {}/{}", self.state.current + 1, self.steps.len())
    }

    /// Fraction of the progress bar to fill, in `(0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.state.current + 1) as f32 / self.steps.len() as f32
    }

    /// Direction of the last transition.
    pub fn slide_direction(&self) -> SlideDirection {
        self.state.slide_direction()
    }

    /// Current form values.
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Inline messages of fields that failed their last check.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Inline message for `field`, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Ticket materialized on entering the terminal step.
    pub fn ticket(&self) -> Option<&TicketRecord> {
        self.ticket.as_ref()
    }

    /// Backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply raw input to `field`.
    ///
    /// Typing is never blocked. A field that already shows an error is re-checked so the
    /// message disappears as soon as the value becomes valid.
    pub fn set_value(&mut self, field: Field, raw: &str) {
        self.values.set(field, raw);
        if self.errors.contains_key(&field) {
            self.revalidate(field);
        }
    }

    /// Store an uploaded image reference in the form.
    pub fn attach_image(&mut self, image: &LocalImageRef) {
        self.values.profile_image_ref = image.uri().to_string();
        self.revalidate(Field::ProfileImageRef);
    }

    fn revalidate(&mut self, field: Field) {
        match validate_field(field, &self.values).message {
            Some(msg) => {
                self.errors.insert(field, msg);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    /// Validate the active step and move forward. See [`WizardController::advance_at`].
    pub fn advance(&mut self) -> TicketResult<Advance> {
        self.advance_at(Utc::now())
    }

    /// Validate the active step's fields and move one step forward.
    ///
    /// Leaving the second-to-last step first materializes a [`TicketRecord`] stamped with
    /// `now` and appends it to the store. If that append fails the error is returned and
    /// the wizard stays where it is.
    pub fn advance_at(&mut self, now: DateTime<Utc>) -> TicketResult<Advance> {
        let from = self.state.current;
        if from + 1 >= self.steps.len() {
            return Ok(Advance::AtEnd);
        }

        let fields = self.steps[from].fields;
        let failed = validate_fields(fields, &self.values);
        for f in fields {
            self.errors.remove(f);
        }
        if !failed.is_empty() {
            tracing::debug!(step = from, failed = failed.len(), "advance blocked");
            self.errors.extend(failed.clone());
            return Ok(Advance::Blocked { errors: failed });
        }

        if from + 2 == self.steps.len() {
            let record = self.materialize(now)?;
            self.ticket = Some(record);
        }

        let to = from + 1;
        self.state = WizardState {
            current: to,
            previous: from,
        };
        tracing::debug!(from, to, "advanced");
        Ok(Advance::Moved { from, to })
    }

    #[tracing::instrument(skip(self))]
    fn materialize(&mut self, now: DateTime<Utc>) -> TicketResult<TicketRecord> {
        let record = TicketRecord::materialize(&self.values, now)?;
        self.store.append(&record)?;
        tracing::info!(
            ticket_type = ?record.values.ticket_type,
            units = ?record.values.ticket_unit,
            "ticket materialized"
        );
        Ok(record)
    }

    /// Move one step back without validation. Returns `false` on the first step.
    pub fn retreat(&mut self) -> bool {
        let from = self.state.current;
        if from == 0 {
            return false;
        }
        self.state = WizardState {
            current: from - 1,
            previous: from,
        };
        tracing::debug!(from, to = from - 1, "retreated");
        true
    }

    /// Start a new booking: default values, no errors, first step.
    ///
    /// Already persisted tickets are left alone.
    pub fn reset_to_start(&mut self) {
        self.values = FormValues::default();
        self.errors.clear();
        self.ticket = None;
        self.state = WizardState::default();
        tracing::debug!("wizard reset");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wizard/controller.rs"]
mod tests;
