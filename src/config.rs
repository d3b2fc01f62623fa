use std::env;

use dotenvy::dotenv;

const DEFAULT_DATABASE_URL: &str = "sqlite://polls.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
}

impl Config {
    /// Reads `DATABASE_URL` from the environment (honoring a `.env` file),
    /// falling back to a local SQLite file.
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        Config { database_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_local_sqlite_file() {
        unsafe {
            env::remove_var("DATABASE_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
    }
}
