use std::env;

const DATABASE_PATH_VAR: &str = "DATABASE_PATH";

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "tournament.db".to_string(),
            pool_size: 4,
        }
    }
}

impl DatabaseSettings {
    /// Defaults, with the path taken from `DATABASE_PATH` when it is set.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(path) = env::var(DATABASE_PATH_VAR) {
            settings.path = path;
        }
        settings
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
        }
    }

    /// An explicit path (e.g. from the command line) wins over the environment.
    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.database.path = path;
        }
        self
    }
}

// Config is passed explicitly to whatever needs it rather than held in a global.
