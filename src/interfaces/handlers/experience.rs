use actix_web::{web, Either, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{experience::JobExperience, experience_form::ExperienceFormInput},
    errors::AppError,
    use_cases::{callbacks::ExperienceCallbacks, experience_form::ExperienceForm},
    AppState,
};

/// Keeps the record handed to `on_submit` so it can be returned to the
/// client. Cancelling has no meaning over a single request.
#[derive(Debug, Default)]
struct CapturedSubmission {
    record: Option<JobExperience>,
}

impl ExperienceCallbacks for CapturedSubmission {
    fn on_submit(&mut self, record: JobExperience) {
        self.record = Some(record);
    }

    fn on_cancel(&mut self) {}
}

#[instrument(skip(state))]
pub async fn get_form(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&state.descriptor)
}

#[instrument(skip(state, data))]
pub async fn validate_experience(
    state: web::Data<AppState>,
    data: Either<web::Json<ExperienceFormInput>, web::Form<ExperienceFormInput>>,
) -> Result<impl Responder, AppError> {
    let input = match data {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let mut form = ExperienceForm::new(state.schema, CapturedSubmission::default());
    form.load(input);
    form.submit()?;

    let record = form
        .callbacks_mut()
        .record
        .take()
        .ok_or_else(|| AppError::InternalError("submitted record was not captured".into()))?;

    Ok(HttpResponse::Ok().json(record))
}
