pub mod key_value_storage;
pub mod user_record_repository;
