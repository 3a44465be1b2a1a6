pub mod experience;
pub mod experience_form;
pub mod form_options;
