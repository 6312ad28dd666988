use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub cors_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set".to_string())?;

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a valid number: {}", raw))?,
            Err(_) => 8080,
        };

        let cors_origin = env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            database_url,
            port,
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_database_url_is_an_error() {
        // Serialize env mutation against the other test
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("DATABASE_URL");
        let result = AppConfig::from_env();
        assert_eq!(result.unwrap_err(), "DATABASE_URL must be set");
    }

    #[test]
    fn defaults_applied_when_optional_vars_absent() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("DATABASE_URL", "postgres://localhost/diarycard");
        env::remove_var("PORT");
        env::remove_var("CORS_ORIGIN");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origin, "http://localhost:3000");

        env::remove_var("DATABASE_URL");
    }

    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
}
