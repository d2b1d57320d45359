mod settings;

use std::{
    fs,
    path::PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};
pub use settings::{
    Settings,
    SETTINGS_FILE,
};
use tracing::{
    info,
    warn,
};

use crate::core::KanjiError;

const APP_NAME: &str = "kanjiren";

pub fn get_app_data_dir() -> PathBuf {
    match dirs::data_local_dir() {
        Some(data_dir) => ensure_dir(data_dir.join(APP_NAME)),
        None => {
            warn!("No local data directory on this platform, using the working directory");
            PathBuf::from(".")
        }
    }
}

/// A directory that cannot be created is still returned; the read or write
/// that follows reports the real error.
fn ensure_dir(dir: PathBuf) -> PathBuf {
    if let Err(e) = fs::create_dir_all(&dir) {
        warn!("Failed to create {}: {}", dir.display(), e);
    }
    dir
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), KanjiError> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    info!("Data saved to: {}", file_path.display());
    Ok(())
}

pub fn load_json<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> Result<T, KanjiError> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    info!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(data) => data,
        Err(e) => {
            warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}
