//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "app": { "demoMode": false },
//!   "adminEmail": "admin@rewear.com",
//!   "startingPoints": 100,
//!   "listingReward": 50
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default admin email; registering with it grants the admin flag
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@rewear.com";

/// Points granted to every new user
pub const DEFAULT_STARTING_POINTS: i64 = 100;

/// Points awarded for listing an item
pub const DEFAULT_LISTING_REWARD: i64 = 50;

/// Raw settings.json structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default = "default_admin_email")]
    admin_email: String,
    #[serde(default = "default_starting_points")]
    starting_points: i64,
    #[serde(default = "default_listing_reward")]
    listing_reward: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    demo_mode: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

fn default_admin_email() -> String {
    DEFAULT_ADMIN_EMAIL.to_string()
}

fn default_starting_points() -> i64 {
    DEFAULT_STARTING_POINTS
}

fn default_listing_reward() -> i64 {
    DEFAULT_LISTING_REWARD
}

impl Default for SettingsFile {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            admin_email: default_admin_email(),
            starting_points: default_starting_points(),
            listing_reward: default_listing_reward(),
        }
    }
}

/// ReWear configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub demo_mode: bool,
    /// Registering with this email yields an admin account
    pub admin_email: String,
    pub starting_points: i64,
    pub listing_reward: i64,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        let raw = SettingsFile::default();
        Self {
            demo_mode: raw.app.demo_mode,
            admin_email: raw.admin_email.clone(),
            starting_points: raw.starting_points,
            listing_reward: raw.listing_reward,
            _raw_settings: raw,
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// Demo mode can be enabled via:
    /// 1. Settings file (rw demo on)
    /// 2. Environment variable REWEAR_DEMO_MODE (for CI/testing)
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        // Check env var for demo mode override (for CI/testing)
        let demo_mode = match std::env::var("REWEAR_DEMO_MODE").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => false,
            _ => raw.app.demo_mode,
        };

        Ok(Self {
            demo_mode,
            admin_email: raw.admin_email.clone(),
            starting_points: raw.starting_points,
            listing_reward: raw.listing_reward,
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory, preserving settings this view
    /// doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.demo_mode = self.demo_mode;
        settings.admin_email = self.admin_email.clone();
        settings.starting_points = self.starting_points;
        settings.listing_reward = self.listing_reward;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// File name of the marketplace document for this configuration
    pub fn data_filename(&self) -> &'static str {
        if self.demo_mode {
            "demo.json"
        } else {
            "rewear.json"
        }
    }

    /// Enable demo mode
    pub fn enable_demo_mode(&mut self) {
        self.demo_mode = true;
    }

    /// Disable demo mode
    pub fn disable_demo_mode(&mut self) {
        self.demo_mode = false;
    }
}
