// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions.
//!
//! Each struct maps to a section of `cerebra_configuration.toml`. All
//! sections and fields carry defaults, so a missing file section never
//! fails deserialization.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CerebraConfig {
    pub system: SystemConfig,
    pub validation: ValidationConfig,
    pub storage: StorageConfig,
}

/// System-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SystemConfig {
    pub debug: bool,
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "WARNING".to_string(),
        }
    }
}

/// Entity validation bounds, consulted before an entity may be persisted
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Upper bound on surface vertex counts; larger surfaces are rejected
    /// before any structural check runs
    pub max_surface_vertices: u64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_surface_vertices: 300_000,
        }
    }
}

/// Storage layout configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root directory entities are persisted under
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("CEREBRA_STORAGE"),
        }
    }
}
