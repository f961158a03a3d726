pub mod load_user_record_usecase;
pub mod save_user_record_usecase;
