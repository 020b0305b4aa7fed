use common::submission::{ContactErrors, ContactForm, FormStatus};
use gloo_timers::callback::Timeout;

pub struct ContactFormComponent {
    pub form: ContactForm,
    pub errors: ContactErrors,
    pub status: FormStatus,
    /// Bumped after a successful send so the phone input remounts empty.
    pub generation: u32,
    /// Pending return to `Idle`; dropping it cancels the timer.
    pub status_timer: Option<Timeout>,
}

impl ContactFormComponent {
    pub fn new() -> Self {
        Self {
            form: ContactForm::default(),
            errors: ContactErrors::default(),
            status: FormStatus::Idle,
            generation: 0,
            status_timer: None,
        }
    }
}
