
use std::{cell::RefCell, rc::Rc};

use experience_form::{
    entities::{experience::JobExperience, experience_form::FormField},
    use_cases::{
        callbacks::{FnCallbacks, MockExperienceCallbacks},
        experience_form::{ExperienceForm, FormStatus},
    },
};
use mockall::predicate::function;
use test_experience::*;

fn filled_form(callbacks: MockExperienceCallbacks) -> ExperienceForm<MockExperienceCallbacks> {
    let mut form = ExperienceForm::new(test_schema(), callbacks);
    form.set_field(FormField::JobTitle, "Retail Sales Manager");
    form.set_field(FormField::EmploymentType, "Full-time");
    form.set_field(FormField::Company, "Microsoft");
    form.set_is_current(true);
    form.set_field(FormField::StartMonth, "3");
    form.set_field(FormField::StartYear, "2021");
    form
}

#[test]
fn submitting_current_job_calls_on_submit_once() {
    let mut callbacks = MockExperienceCallbacks::new();
    callbacks
        .expect_on_submit()
        .with(function(|record: &JobExperience| {
            record.is_current() && record.end_date().is_none()
        }))
        .times(1)
        .return_const(());
    callbacks.expect_on_cancel().never();

    let mut form = filled_form(callbacks);
    let record = form.submit().expect("current job should submit");

    assert!(record.is_current());
    assert_eq!(form.status(), FormStatus::Submitted);
    assert!(form.errors().is_empty());
}

#[test]
fn submitting_previous_job_hands_over_end_date() {
    let mut callbacks = MockExperienceCallbacks::new();
    callbacks
        .expect_on_submit()
        .with(function(|record: &JobExperience| {
            record
                .end_date()
                .is_some_and(|end| end > record.details().start_date)
        }))
        .times(1)
        .return_const(());

    let mut form = filled_form(callbacks);
    form.set_is_current(false);
    form.set_field(FormField::EndMonth, "4");
    form.set_field(FormField::EndYear, "2022");

    let record = form.submit().expect("previous job should submit");

    assert_eq!(record.end_date().map(|d| (d.month(), d.year())), Some((4, 2022)));
}

#[test]
fn invalid_submission_shows_errors_and_skips_on_submit() {
    let mut callbacks = MockExperienceCallbacks::new();
    callbacks.expect_on_submit().never();

    let mut form = filled_form(callbacks);
    form.set_field(FormField::JobTitle, "");
    form.set_field(FormField::Company, "");

    let err = form.submit().expect_err("empty title and company");

    assert_eq!(form.status(), FormStatus::Rejected);
    assert_eq!(form.error_for("job_title"), Some("Title is required"));
    assert_eq!(form.error_for("company"), Some("Company or organisation is required"));
    assert_eq!(form.error_for("start_date.month"), None);
    assert_eq!(err.field_errors().len(), 2);
}

#[test]
fn end_date_ordering_error_is_attached_to_end_date() {
    let mut callbacks = MockExperienceCallbacks::new();
    callbacks.expect_on_submit().never();

    let mut form = filled_form(callbacks);
    form.set_is_current(false);
    form.set_field(FormField::StartMonth, "6");
    form.set_field(FormField::StartYear, "2020");
    form.set_field(FormField::EndMonth, "1");
    form.set_field(FormField::EndYear, "2020");

    assert!(form.submit().is_err());
    assert_eq!(form.error_for("end_date"), Some("End date must be after start date"));
}

#[test]
fn toggling_current_clears_and_disables_end_date() {
    let mut form = filled_form(MockExperienceCallbacks::new());
    form.set_is_current(false);
    form.set_field(FormField::EndMonth, "4");
    form.set_field(FormField::EndYear, "2022");

    form.set_is_current(true);

    assert!(!form.is_end_date_enabled());
    assert_eq!(form.input().end_month, "");
    assert_eq!(form.input().end_year, "");
    assert!(!form.set_field(FormField::EndMonth, "5"));
    assert_eq!(form.input().end_month, "");

    form.set_is_current(false);

    assert!(form.is_end_date_enabled());
    assert_eq!(form.input().end_month, "");
    assert!(form.set_field(FormField::EndMonth, "5"));
    assert_eq!(form.input().end_month, "5");
}

#[test]
fn cancel_calls_on_cancel_once_and_discards_edits() {
    let mut callbacks = MockExperienceCallbacks::new();
    callbacks.expect_on_cancel().times(1).return_const(());
    callbacks.expect_on_submit().never();

    let mut form = filled_form(callbacks);
    form.set_field(FormField::JobTitle, "");
    let _ = form.submit();

    form.cancel();

    assert_eq!(form.input().company, "");
    assert!(form.errors().is_empty());
    assert_eq!(form.status(), FormStatus::Editing);
}

#[test]
fn form_stays_editable_after_rejection() {
    let mut callbacks = MockExperienceCallbacks::new();
    callbacks.expect_on_submit().times(1).return_const(());

    let mut form = filled_form(callbacks);
    form.set_field(FormField::Company, "");
    assert!(form.submit().is_err());

    form.set_field(FormField::Company, "Microsoft");
    assert_eq!(form.status(), FormStatus::Editing);

    assert!(form.submit().is_ok());
    assert!(form.error_for("company").is_none());
}

#[test]
fn live_validation_clears_fixed_fields_after_first_submit() {
    let mut callbacks = MockExperienceCallbacks::new();
    callbacks.expect_on_submit().never();

    let mut form = ExperienceForm::new(test_schema(), callbacks).with_live_validation(true);
    form.set_field(FormField::JobTitle, "Clerk");
    assert!(form.errors().is_empty(), "no messages before the first submit");

    assert!(form.submit().is_err());
    assert!(form.error_for("company").is_some());

    form.set_field(FormField::Company, "Acme");

    assert!(form.error_for("company").is_none());
    assert!(form.error_for("start_date.month").is_some());
}

#[test]
fn loading_a_current_record_applies_toggle_effect() {
    let mut form = ExperienceForm::new(test_schema(), MockExperienceCallbacks::new());

    form.load(TestExperience::current().ended("1", "2019").build());

    assert!(!form.is_end_date_enabled());
    assert_eq!(form.input().end_year, "");
}

#[test]
fn closure_callbacks_receive_the_record() {
    let submitted: Rc<RefCell<Vec<JobExperience>>> = Rc::default();
    let cancelled = Rc::new(RefCell::new(0));

    let sink = submitted.clone();
    let counter = cancelled.clone();
    let callbacks = FnCallbacks::new(
        move |record| sink.borrow_mut().push(record),
        move || *counter.borrow_mut() += 1,
    );

    let mut form = ExperienceForm::new(test_schema(), callbacks);
    form.load(TestExperience::previous().build());
    form.submit().expect("previous job should submit");
    form.load_experience(&submitted.borrow()[0].clone());
    form.cancel();

    assert_eq!(submitted.borrow().len(), 1);
    assert!(!submitted.borrow()[0].is_current());
    assert_eq!(*cancelled.borrow(), 1);
}
