use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use dqa_core::tables::{DEFAULT_HTS_TST_TABLE, DEFAULT_TX_ML_TABLE};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "DQA_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqaConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub tables: TableNames,
}

impl Default for DqaConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind_addr: default_bind_addr(),
            store: StoreConfig::default(),
            tables: TableNames::default(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

/// Where evaluation rows are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Rows live only as long as the process.
    #[default]
    Memory,
    S3 {
        #[serde(skip_serializing_if = "Option::is_none", default)]
        region: Option<String>,
        bucket: String,
        #[serde(default)]
        prefix: String,
    },
    GoogleSheets {
        spreadsheet_id: String,
        credentials: CredentialSource,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CredentialSource {
    /// Path to a service-account key file.
    File { path: PathBuf },
    Inline {
        client_email: String,
        private_key: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        token_uri: Option<String>,
    },
}

/// Worksheet (or object) name per form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableNames {
    pub hts_tst: String,
    pub tx_ml: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            hts_tst: DEFAULT_HTS_TST_TABLE.to_string(),
            tx_ml: DEFAULT_TX_ML_TABLE.to_string(),
        }
    }
}

impl TableNames {
    /// Table backing the form with `form_id`.
    pub fn for_form(&self, form_id: &str) -> Option<&str> {
        match form_id {
            "hts_tst" => Some(&self.hts_tst),
            "tx_ml" => Some(&self.tx_ml),
            _ => None,
        }
    }
}

fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("dqa").join("config.json"))
}

/// `$DQA_CONFIG` if set, otherwise the platform config directory.
pub fn config_path() -> eyre::Result<PathBuf> {
    match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => Ok(PathBuf::from(path)),
        None => default_config_path(),
    }
}

/// Load the config, or defaults if no file exists yet.
pub fn load_config() -> eyre::Result<DqaConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(DqaConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<DqaConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: DqaConfig = serde_json::from_value(migrated)?;
    validate(&config)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: the pre-versioned layout kept a `google_sheets` block with
    // sheet names and a sibling `google_service_account` key object.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        if let Some(legacy) = obj.remove("google_sheets") {
            let spreadsheet_id = legacy
                .get("spreadsheet_id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| eyre::eyre!("google_sheets.spreadsheet_id is missing"))?;
            let mut account = obj
                .remove("google_service_account")
                .ok_or_else(|| eyre::eyre!("google_service_account is missing"))?;
            account
                .as_object_mut()
                .ok_or_else(|| eyre::eyre!("google_service_account is not an object"))?
                .insert("type".to_string(), "inline".into());

            obj.insert(
                "store".to_string(),
                serde_json::json!({
                    "type": "google_sheets",
                    "spreadsheet_id": spreadsheet_id,
                    "credentials": account,
                }),
            );

            let defaults = TableNames::default();
            let sheet = |field: &str, fallback: &str| {
                legacy
                    .get(field)
                    .and_then(|v| v.as_str())
                    .unwrap_or(fallback)
                    .to_string()
            };
            obj.insert(
                "tables".to_string(),
                serde_json::json!({
                    "hts_tst": sheet("hts_sheet", defaults.hts_tst.as_str()),
                    "tx_ml": sheet("txml_sheet", defaults.tx_ml.as_str()),
                }),
            );
        }

        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

/// Table names end up in URLs and object keys.
fn validate(config: &DqaConfig) -> eyre::Result<()> {
    for name in [&config.tables.hts_tst, &config.tables.tx_ml] {
        let ok = !name.trim().is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' '));
        if !ok {
            return Err(eyre::eyre!(
                "invalid table name '{name}': use letters, digits, '_', '-' or spaces"
            ));
        }
    }
    if config.tables.hts_tst == config.tables.tx_ml {
        return Err(eyre::eyre!("both forms cannot share table '{}'", config.tables.tx_ml));
    }
    Ok(())
}

pub fn save_config_to(path: &Path, config: &DqaConfig) -> eyre::Result<()> {
    validate(config)?;
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path has no parent: {}", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Inline credentials may hold a private key.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
