mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::sync::Arc;

use tokio::io::{BufReader, stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    domain::repositories::key_value_storage::KeyValueStorage,
    infrastructure::{
        in_memory_key_value_storage::InMemoryKeyValueStorage,
        json_user_record_repository::JsonUserRecordRepository,
        sqlite_key_value_storage::SqliteKeyValueStorage,
        storage_config::{StorageBackend, StorageConfig},
    },
    presentation::{screens::registration_screen::RegistrationScreen, terminal},
    usecase::{
        load_user_record_usecase::LoadUserRecordUsecase,
        save_user_record_usecase::SaveUserRecordUsecase,
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // logs go to stderr so they don't interleave with the form output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = StorageConfig::from_env()?;
    info!(backend = %config.backend, "Starting user registry");

    let storage: Arc<dyn KeyValueStorage> = match config.backend {
        StorageBackend::Sqlite => Arc::new(SqliteKeyValueStorage::connect(&config).await?),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStorage::new()),
    };

    let repository = JsonUserRecordRepository::new(storage);
    let save_service = SaveUserRecordUsecase::new(repository.clone());
    let load_service = LoadUserRecordUsecase::new(repository);
    let mut screen = RegistrationScreen::new(save_service, load_service);

    terminal::run(&mut screen, BufReader::new(stdin()), stdout()).await?;

    Ok(())
}
