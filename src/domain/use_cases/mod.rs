pub mod callbacks;
pub mod experience_form;
pub mod validation;
