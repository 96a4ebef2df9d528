use anyhow::Result;
use log::info;
use serde_json::{Map, Value};
use std::path::Path;

use crate::domain::{CategoryType, RankingSet};
use crate::store::json_file::JsonFile;

/// A ranking that differs from the stored profile
#[derive(Debug, Clone, PartialEq)]
pub struct RankingChange {
    pub category: CategoryType,
    pub previous: Value,
    pub current: u32,
}

/// Profile data file with a `rankings` object among unrelated fields
pub struct ProfileStore {
    file: JsonFile,
}

impl ProfileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Merge `rankings` into the profile and persist it if anything changed.
    pub fn update_rankings(&self, rankings: &RankingSet) -> Result<Vec<RankingChange>> {
        let mut profile = self.file.read("profile")?;
        let changes = apply_rankings(&mut profile, rankings)?;

        if changes.is_empty() {
            info!("No changes needed.");
            return Ok(changes);
        }

        self.file.write(&profile)?;
        info!("Profile updated successfully!");
        Ok(changes)
    }
}

/// Overwrite only the ranking keys whose value differs; everything else is kept.
pub fn apply_rankings(profile: &mut Value, rankings: &RankingSet) -> Result<Vec<RankingChange>> {
    let Some(fields) = profile.as_object_mut() else {
        anyhow::bail!("Profile must be a JSON object");
    };

    let stored = fields
        .entry("rankings")
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(stored) = stored.as_object_mut() else {
        anyhow::bail!("Profile field 'rankings' must be a JSON object");
    };

    let mut changes = Vec::new();
    for (&category, &rank) in rankings {
        let previous = stored.get(category.as_str()).cloned().unwrap_or(Value::Null);
        if previous.as_u64() == Some(u64::from(rank)) {
            continue;
        }

        info!("Updating {}: {} -> {}", category, previous, rank);
        stored.insert(category.as_str().to_string(), Value::from(rank));
        changes.push(RankingChange {
            category,
            previous,
            current: rank,
        });
    }

    Ok(changes)
}
