pub mod registration_form;
pub mod user_record;
