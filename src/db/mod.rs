use crate::api::models::ServerConfig;
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{errors::StorageError, LocalStorage, Storage};

/// Error type for database operations on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DbError(String);

#[cfg(not(target_arch = "wasm32"))]
impl DbError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::error::Error for DbError {}

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "rustycast.app_settings";
#[cfg(target_arch = "wasm32")]
const SERVERS_KEY: &str = "rustycast.servers";

fn default_slide_duration_ms() -> u32 {
    7500
}

fn default_thumb_size() -> u32 {
    160
}

/// App settings stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub theme: String,
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u32,
    #[serde(default)]
    pub slideshow_shuffle: bool,
    #[serde(default = "default_thumb_size")]
    pub thumb_size: u32,
    #[serde(default)]
    pub last_path: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            slide_duration_ms: default_slide_duration_ms(),
            slideshow_shuffle: false,
            thumb_size: default_thumb_size(),
            last_path: None,
        }
    }
}

// Database operations for native platforms
// These run directly on desktop without needing #[server]

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_servers(servers: Vec<ServerConfig>) -> Result<(), DbError> {
    let conn = get_db_connection()?;

    // Clear existing servers and insert new ones
    conn.execute("DELETE FROM servers", [])
        .map_err(|e| DbError::new(e.to_string()))?;

    for server in servers {
        conn.execute(
            "INSERT INTO servers (id, name, url, active) VALUES (?1, ?2, ?3, ?4)",
            [
                &server.id,
                &server.name,
                &server.url,
                &(if server.active { "1" } else { "0" }).to_string(),
            ],
        )
        .map_err(|e| DbError::new(e.to_string()))?;
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_servers(servers: Vec<ServerConfig>) -> Result<(), StorageError> {
    LocalStorage::set(SERVERS_KEY, servers)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_servers() -> Result<Vec<ServerConfig>, DbError> {
    let conn = get_db_connection()?;

    let mut stmt = conn
        .prepare("SELECT id, name, url, active FROM servers")
        .map_err(|e| DbError::new(e.to_string()))?;

    let servers = stmt
        .query_map([], |row: &rusqlite::Row| {
            Ok(ServerConfig {
                id: row.get(0)?,
                name: row.get(1)?,
                url: row.get(2)?,
                active: row.get::<_, String>(3)? == "1",
            })
        })
        .map_err(|e| DbError::new(e.to_string()))?
        .filter_map(|r| r.ok())
        .collect();

    Ok(servers)
}

#[cfg(target_arch = "wasm32")]
pub async fn load_servers() -> Result<Vec<ServerConfig>, StorageError> {
    match LocalStorage::get(SERVERS_KEY) {
        Ok(servers) => Ok(servers),
        Err(_) => Ok(Vec::new()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn save_settings(settings: AppSettings) -> Result<(), DbError> {
    let conn = get_db_connection()?;

    let settings_json =
        serde_json::to_string(&settings).map_err(|e| DbError::new(e.to_string()))?;

    conn.execute(
        "INSERT OR REPLACE INTO settings (key, value) VALUES ('app_settings', ?1)",
        [&settings_json],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn save_settings(settings: AppSettings) -> Result<(), StorageError> {
    LocalStorage::set(SETTINGS_KEY, settings)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn load_settings() -> Result<AppSettings, DbError> {
    let conn = get_db_connection()?;

    let mut stmt = conn
        .prepare("SELECT value FROM settings WHERE key = 'app_settings'")
        .map_err(|e| DbError::new(e.to_string()))?;

    let settings = stmt
        .query_map([], |row: &rusqlite::Row| row.get::<_, String>(0))
        .map_err(|e| DbError::new(e.to_string()))?
        .filter_map(|r| r.ok())
        .next()
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default();

    Ok(settings)
}

#[cfg(target_arch = "wasm32")]
pub async fn load_settings() -> Result<AppSettings, StorageError> {
    match LocalStorage::get(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(_) => Ok(AppSettings::default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn initialize_database() -> Result<(), DbError> {
    let conn = get_db_connection()?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS servers (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            url TEXT NOT NULL,
            active TEXT NOT NULL DEFAULT '1'
        )",
        [],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| DbError::new(e.to_string()))?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub async fn initialize_database() -> Result<(), StorageError> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_db_connection() -> Result<rusqlite::Connection, DbError> {
    let data_dir = dirs::data_dir()
        .map(|dir| dir.join("rustycast"))
        .unwrap_or_else(|| std::path::PathBuf::from("."));
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| DbError::new(format!("Failed to create data dir: {}", e)))?;
    let db_path = data_dir.join("rustycast.db");

    rusqlite::Connection::open(&db_path)
        .map_err(|e| DbError::new(format!("Failed to open database: {}", e)))
}
