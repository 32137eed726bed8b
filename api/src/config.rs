use std::env;

const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// PostgreSQL connection URL. The server runs without a store when unset.
    pub database_url: Option<String>,
    /// Expected database name, reported by the diagnostics endpoint
    pub database_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            port: get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            database_url: get("DATABASE_URL"),
            database_name: get("DATABASE_NAME"),
        }
    }

    pub fn database_url_set(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn database_name_set(&self) -> bool {
        self.database_name.is_some()
    }
}
