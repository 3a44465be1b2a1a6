mod domain;
mod interfaces;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, routes};

use entities::form_options::FormDescriptor;
use use_cases::validation::ExperienceSchema;

pub struct AppState {
    pub schema: ExperienceSchema,
    pub descriptor: FormDescriptor,
}

impl AppState {
    pub fn new(config: &settings::AppConfig) -> Self {
        let year_range = config.year_range();

        tracing::debug!(min = year_range.min, max = year_range.max, "experience year range");

        AppState {
            schema: ExperienceSchema::new(year_range),
            descriptor: FormDescriptor::new(year_range),
        }
    }
}
