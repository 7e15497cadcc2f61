use crate::client::{ ClientError, LocalStorage };

pub const DEFAULT_LOCAL_STORAGE_FILE_PATH: &str = ".coffee-api-adventure/local_storage.json";

pub struct LocalStorageFactory {}

impl LocalStorageFactory {
    pub fn create() -> Result<LocalStorage, ClientError> {
        let home_dir = dirs::home_dir().ok_or_else(|| ClientError::Storage(String::from("Couldn't determine the home directory")))?;
        let local_storage_file_path = dotenv::var("LOCAL_STORAGE_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOCAL_STORAGE_FILE_PATH.to_string());
        LocalStorage::open(home_dir.join(local_storage_file_path))
    }
}
