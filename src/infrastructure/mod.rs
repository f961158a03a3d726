pub mod in_memory_key_value_storage;
pub mod json_user_record_repository;
pub mod sqlite_key_value_storage;
pub mod storage_config;
