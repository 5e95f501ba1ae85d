use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

pub const ENV_BACKEND_URL: &str = "VERITAS_BACKEND_URL";
pub const ENV_BACKEND_ANON_KEY: &str = "VERITAS_BACKEND_ANON_KEY";
pub const ENV_LOG_LEVEL: &str = "VERITAS_LOG_LEVEL";

/// Load the configuration once and return it. Later calls reuse the first
/// result.
///
/// Native builds read `.env` and `config.toml`, then apply `VERITAS_*`
/// environment overrides. Browser builds have no filesystem, so they use the
/// values baked in at compile time.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let mut config = read_config_file();
        apply_overrides(&mut config, env_var);
        config
    })
}

/// Apply `VERITAS_*` overrides from `lookup` onto `config`. Empty values are
/// ignored.
pub fn apply_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    if let Some(url) = get(ENV_BACKEND_URL) {
        config.backend.url = url;
    }
    if let Some(key) = get(ENV_BACKEND_ANON_KEY) {
        config.backend.anon_key = key;
    }
    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.log_level = level;
    }
}

/// Parse `config.toml` contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        eprintln!("[config] Failed to parse config.toml: {e} - using defaults");
        AppConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> AppConfig {
    let _ = dotenvy::dotenv();
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            eprintln!("[config] {CONFIG_PATH} not found ({e}) - using defaults");
            AppConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config_file() -> AppConfig {
    AppConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_var(key: &str) -> Option<String> {
    let value = match key {
        ENV_BACKEND_URL => option_env!("VERITAS_BACKEND_URL"),
        ENV_BACKEND_ANON_KEY => option_env!("VERITAS_BACKEND_ANON_KEY"),
        ENV_LOG_LEVEL => option_env!("VERITAS_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}
