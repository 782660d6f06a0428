/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` and call `Config::from_env()` at
/// startup. A `.env` file in the working directory is read first when present;
/// variables already set in the process environment win.
///
/// # Panics
///
/// Panics if any required env var is missing or cannot be deserialized.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Self {
        dotenvy::dotenv().ok();
        envy::from_env().expect("failed to load config from environment")
    }
}
