//! Sandbox configuration

use attr_core::config::{load_constants, ConfigError};
use attr_core::{PlayerKind, SkillProfile, StatRules};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sandbox loading error
#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("Failed to read sandbox file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse sandbox TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid engine constants: {0}")]
    Constants(#[from] ConfigError),
}

/// Starting character and world for the sandbox
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub kind: PlayerKind,
    /// Starting strength, intelligence, dexterity
    pub base: [i32; 3],
    pub hp_max: i32,
    pub god: String,
    /// Stored divine stamina while the duration is toggled on
    pub divine_stamina: i32,
    pub seed: u64,
    /// Answer the level-up prompt without asking
    pub auto_stat_gain: Option<char>,
    /// Engine constants file; the bundled constants otherwise
    pub constants: Option<PathBuf>,
    pub skills: SkillProfile,
    pub log_dir: PathBuf,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        SandboxConfig {
            kind: PlayerKind::Standard,
            base: [12, 10, 10],
            hp_max: 60,
            god: "Ashenzari".to_string(),
            divine_stamina: 4,
            seed: 42,
            auto_stat_gain: None,
            constants: None,
            skills: SkillProfile::default(),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl SandboxConfig {
    pub fn load(path: &Path) -> Result<Self, SandboxError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, SandboxError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, SandboxError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Engine rules for this sandbox
    pub fn rules(&self) -> Result<StatRules, SandboxError> {
        match &self.constants {
            Some(path) => Ok(StatRules::new(load_constants(path)?)),
            None => Ok(StatRules::standard()),
        }
    }
}
