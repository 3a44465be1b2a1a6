use tracing::{debug, info, warn};

use crate::{
    entities::{
        experience::JobExperience,
        experience_form::{ExperienceFormInput, FormErrors, FormField},
    },
    errors::AppError,
    use_cases::{callbacks::ExperienceCallbacks, validation::ExperienceSchema},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    /// Last submission failed validation; errors are shown and the form
    /// stays editable.
    Rejected,
    /// Last submission was handed to `on_submit`.
    Submitted,
}

/// State and event handlers of the job experience form.
///
/// The form owns its field values and mutates them only in response to the
/// handlers below. Validation is delegated to [`ExperienceSchema`]; the
/// outcome is handed to the [`ExperienceCallbacks`] collaborator.
pub struct ExperienceForm<C>
where
    C: ExperienceCallbacks,
{
    schema: ExperienceSchema,
    callbacks: C,
    input: ExperienceFormInput,
    errors: FormErrors,
    status: FormStatus,
    live_validation: bool,
    submit_attempted: bool,
}

impl<C> ExperienceForm<C>
where
    C: ExperienceCallbacks,
{
    pub fn new(schema: ExperienceSchema, callbacks: C) -> Self {
        ExperienceForm {
            schema,
            callbacks,
            input: ExperienceFormInput::default(),
            errors: FormErrors::new(),
            status: FormStatus::Editing,
            live_validation: false,
            submit_attempted: false,
        }
    }

    /// Re-validate after every edit once a submission has been attempted.
    pub fn with_live_validation(mut self, enabled: bool) -> Self {
        self.live_validation = enabled;
        self
    }

    /// Pre-fills the form, e.g. when editing an existing entry.
    pub fn load(&mut self, input: ExperienceFormInput) {
        let is_current = input.is_current;
        self.input = input;
        self.set_is_current(is_current);
    }

    pub fn load_experience(&mut self, experience: &JobExperience) {
        self.load(ExperienceFormInput::from(experience));
    }

    pub fn input(&self) -> &ExperienceFormInput {
        &self.input
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    pub fn is_end_date_enabled(&self) -> bool {
        !self.input.is_current
    }

    /// Edits one input. Returns `false` when the input is disabled.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if field.is_end_date() && !self.is_end_date_enabled() {
            debug!(%field, "ignoring edit of disabled end date input");
            return false;
        }

        *self.input.value_mut(field) = value.into();
        self.after_edit();
        true
    }

    /// Toggle effect of the "currently employed" checkbox: turning it on
    /// clears and disables the end date; turning it off re-enables the end
    /// date inputs, which stay empty.
    pub fn set_is_current(&mut self, is_current: bool) {
        self.input.is_current = is_current;
        if is_current {
            self.input.clear_end_date();
            debug!("end date cleared for current position");
        }
        self.after_edit();
    }

    pub fn validate(&self) -> Result<JobExperience, FormErrors> {
        self.schema
            .validate(&self.input)
            .map_err(|errors| FormErrors::from(&errors))
    }

    /// Validates the form and hands the record to `on_submit`, or stores the
    /// field errors and leaves the form editable.
    pub fn submit(&mut self) -> Result<JobExperience, AppError> {
        self.submit_attempted = true;

        match self.validate() {
            Ok(record) => {
                self.errors.clear();
                self.status = FormStatus::Submitted;
                info!(
                    company = %record.details().company,
                    is_current = record.is_current(),
                    "experience submitted"
                );
                self.callbacks.on_submit(record.clone());
                Ok(record)
            }
            Err(errors) => {
                warn!(errors = %errors, "experience submission rejected");
                self.status = FormStatus::Rejected;
                let app_error = AppError::from(&errors);
                self.errors = errors;
                Err(app_error)
            }
        }
    }

    /// Discards every edit and notifies `on_cancel`.
    pub fn cancel(&mut self) {
        debug!("experience form cancelled");
        self.input = ExperienceFormInput::default();
        self.errors.clear();
        self.status = FormStatus::Editing;
        self.submit_attempted = false;
        self.callbacks.on_cancel();
    }

    fn after_edit(&mut self) {
        self.status = FormStatus::Editing;

        if self.live_validation && self.submit_attempted {
            self.errors = match self.validate() {
                Ok(_) => FormErrors::new(),
                Err(errors) => errors,
            };
        }
    }
}
