use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stores user-configurable preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub features: FeatureFlags,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for the finance data files.
    /// Defaults to `<user data dir>/finly`.
    pub data_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "es-AR".into(),
            currency: "ARS".into(),
            features: FeatureFlags::default(),
            data_root: None,
        }
    }
}

impl Config {
    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("finly")
    }
}

/// Per-feature toggles mirroring the sections of the application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureFlags {
    #[serde(default = "FeatureFlags::enabled")]
    pub expenses: bool,
    #[serde(default = "FeatureFlags::enabled")]
    pub income: bool,
    #[serde(default = "FeatureFlags::enabled")]
    pub credit_cards: bool,
    #[serde(default = "FeatureFlags::enabled")]
    pub installments: bool,
    #[serde(default = "FeatureFlags::enabled")]
    pub debts: bool,
    #[serde(default = "FeatureFlags::enabled")]
    pub categories: bool,
}

impl FeatureFlags {
    fn enabled() -> bool {
        true
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            expenses: true,
            income: true,
            credit_cards: true,
            installments: true,
            debts: true,
            categories: true,
        }
    }
}
