use mockall::automock;

use crate::entities::experience::JobExperience;

/// Collaborators the experience form hands its outcome to.
#[automock]
pub trait ExperienceCallbacks {
    /// Called once per successful submission with the validated record.
    fn on_submit(&mut self, record: JobExperience);

    /// Called when the user abandons the form.
    fn on_cancel(&mut self);
}

/// Adapts a pair of closures to [`ExperienceCallbacks`].
pub struct FnCallbacks<S, C>
where
    S: FnMut(JobExperience),
    C: FnMut(),
{
    on_submit: S,
    on_cancel: C,
}

impl<S, C> FnCallbacks<S, C>
where
    S: FnMut(JobExperience),
    C: FnMut(),
{
    pub fn new(on_submit: S, on_cancel: C) -> Self {
        FnCallbacks { on_submit, on_cancel }
    }
}

impl<S, C> ExperienceCallbacks for FnCallbacks<S, C>
where
    S: FnMut(JobExperience),
    C: FnMut(),
{
    fn on_submit(&mut self, record: JobExperience) {
        (self.on_submit)(record)
    }

    fn on_cancel(&mut self) {
        (self.on_cancel)()
    }
}
