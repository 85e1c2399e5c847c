// Copyright 2025 Cerebra Project Developers
// SPDX-License-Identifier: Apache-2.0

//! Framework-owned identity and display metadata shared by all datatypes.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and human-facing metadata carried by every framework capability.
///
/// The `gid` is assigned once at creation and is the handle the persistence
/// layer stores entities under. The `summary` map holds the short
/// human-readable facts shown next to a stored entity (vertex counts,
/// parameter values); framework `configure` refreshes it on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityInfo {
    pub gid: Uuid,
    pub title: String,
    #[serde(default)]
    pub summary: AHashMap<String, String>,
}

impl EntityInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            gid: Uuid::now_v7(),
            title: title.into(),
            summary: AHashMap::new(),
        }
    }

    /// Record one summary fact, replacing any previous value for the key.
    pub fn record(&mut self, key: &str, value: impl ToString) {
        self.summary.insert(key.to_string(), value.to_string());
    }
}

impl Default for EntityInfo {
    fn default() -> Self {
        Self::new("")
    }
}
