//! Demo profile files for the host runner.
//!
//! A profile re-times the welcome script without rebuilding, e.g. for demo
//! booths that want a slower crawl or CI runs that want none at all:
//!
//! ```yaml
//! schema_version: "1.0"
//! timing:
//!   typer_speed_ms: 30
//!   cursor_delay_ms: 300
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Delays above this are assumed to be a typo in the profile.
pub const MAX_DELAY_MS: u32 = 60_000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Unsupported schema_version '{0}'. Supported versions: '1.0'")]
    UnsupportedSchemaVersion(String),
    #[error("Timing value '{field}' is {value} ms, above the {MAX_DELAY_MS} ms cap")]
    DelayTooLong { field: &'static str, value: u32 },
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TimingSection {
    pub typer_speed_ms: u32,
    pub cursor_delay_ms: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DemoProfile {
    pub schema_version: String,
    pub timing: TimingSection,
}

impl DemoProfile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = std::fs::File::open(&path)
            .with_context(|| format!("Failed to open demo profile at {:?}", path.as_ref()))?;
        let profile: Self =
            serde_yaml::from_reader(f).context("Failed to parse demo profile YAML")?;
        profile.validate()?;
        Ok(profile)
    }

    /// Zero delays are fine (accelerated runs); absurd ones are not.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.schema_version != "1.0" {
            return Err(ProfileError::UnsupportedSchemaVersion(
                self.schema_version.clone(),
            ));
        }

        if self.timing.typer_speed_ms > MAX_DELAY_MS {
            return Err(ProfileError::DelayTooLong {
                field: "typer_speed_ms",
                value: self.timing.typer_speed_ms,
            });
        }

        if self.timing.cursor_delay_ms > MAX_DELAY_MS {
            return Err(ProfileError::DelayTooLong {
                field: "cursor_delay_ms",
                value: self.timing.cursor_delay_ms,
            });
        }

        Ok(())
    }
}
