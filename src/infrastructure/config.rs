use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub report: ReportSettings,
    /// Client name to zone tag mapping.
    #[serde(default)]
    pub clients: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            token: String::new(),
            endpoint: default_endpoint(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ReportSettings {
    pub assets_dir: PathBuf,
    pub fonts_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            fonts_dir: PathBuf::from("assets/fonts"),
            output_dir: PathBuf::from("assets/reports"),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}

/// Loads settings from the optional `config/report` file layered under
/// `CF_*` environment variables (`CF_API_TOKEN` carries the token).
/// A missing or empty token is a startup-fatal condition.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/report").required(false))
        .add_source(config::Environment::with_prefix("CF").separator("_"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;
    ensure_token(&settings)?;
    Ok(settings)
}

fn ensure_token(settings: &Settings) -> anyhow::Result<()> {
    if settings.api.token.trim().is_empty() {
        anyhow::bail!("Missing or invalid API token.");
    }
    Ok(())
}
