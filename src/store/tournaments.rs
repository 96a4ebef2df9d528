use anyhow::Result;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

use crate::domain::PastTournament;
use crate::store::json_file::JsonFile;

#[derive(Serialize)]
struct TournamentDocument<'a> {
    past: &'a [PastTournament],
    upcoming: Value,
}

/// Tournament data file: a generated `past` list next to hand-kept `upcoming` entries
pub struct TournamentStore {
    file: JsonFile,
}

impl TournamentStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// The stored `upcoming` section, or an empty list.
    pub fn load_upcoming(&self) -> Result<Value> {
        let Some(existing) = self.file.read_opt("tournament data")? else {
            warn!("{} not found, starting with no upcoming tournaments", self.path().display());
            return Ok(Value::Array(Vec::new()));
        };

        Ok(existing
            .get("upcoming")
            .filter(|upcoming| !is_unset(upcoming))
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    /// Replace `past` with `past`, carrying `upcoming` over unchanged.
    pub fn replace_past(&self, past: &[PastTournament]) -> Result<()> {
        let upcoming = self.load_upcoming()?;
        self.file.write(&TournamentDocument { past, upcoming })?;
        info!("Updated {} (preserved upcoming tournaments)", self.path().display());
        Ok(())
    }
}

/// `null`, `false`, `0` and `""` count as no upcoming section at all.
fn is_unset(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ResultEntry, TournamentResults};
    use chrono::NaiveDate;
    use serde_json::json;
    use std::fs;

    const UPCOMING: &str = r#"[
    {
      "name": "Deutsche Meisterschaft U13",
      "date": "2025-11-21",
      "location": "Bielefeld",
      "categories": [
        "singles",
        "doubles"
      ]
    }
  ]"#;

    fn past() -> Vec<PastTournament> {
        vec![PastTournament {
            name: "Cup".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 9),
            location: "Erlangen".to_string(),
            results: TournamentResults {
                singles: Some(ResultEntry {
                    place: Some(1),
                    category: "Boys Singles U13".to_string(),
                    partner: None,
                    notes: Some("Gold Medal".to_string()),
                }),
                ..Default::default()
            },
        }]
    }

    #[test]
    fn test_replace_past_keeps_upcoming_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournaments.json");
        fs::write(
            &path,
            format!("{{\n  \"past\": [\n    {{ \"name\": \"stale\" }}\n  ],\n  \"upcoming\": {UPCOMING}\n}}\n"),
        )
        .unwrap();

        let store = TournamentStore::new(&path);
        store.replace_past(&[]).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, format!("{{\n  \"past\": [],\n  \"upcoming\": {UPCOMING}\n}}\n"));
    }

    #[test]
    fn test_replace_past_writes_formatted_results() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournaments.json");
        fs::write(&path, r#"{"past": [], "upcoming": []}"#).unwrap();

        TournamentStore::new(&path).replace_past(&past()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({
                "past": [{
                    "name": "Cup",
                    "date": "2024-03-09",
                    "location": "Erlangen",
                    "results": {
                        "singles": { "place": 1, "category": "Boys Singles U13", "notes": "Gold Medal" },
                        "doubles": null,
                        "mixed": null
                    }
                }],
                "upcoming": []
            })
        );
    }

    #[test]
    fn test_missing_upcoming_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournaments.json");
        fs::write(&path, r#"{"past": []}"#).unwrap();
        assert_eq!(TournamentStore::new(&path).load_upcoming().unwrap(), json!([]));

        let missing = TournamentStore::new(dir.path().join("missing.json"));
        assert_eq!(missing.load_upcoming().unwrap(), json!([]));
    }

    #[test]
    fn test_null_upcoming_is_written_back_as_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournaments.json");
        fs::write(&path, r#"{"past": [], "upcoming": null}"#).unwrap();

        let store = TournamentStore::new(&path);
        assert_eq!(store.load_upcoming().unwrap(), json!([]));

        store.replace_past(&past()).unwrap();
        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["upcoming"], json!([]));
    }

    #[test]
    fn test_other_unset_upcoming_values_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournaments.json");
        let store = TournamentStore::new(&path);

        for upcoming in [json!(false), json!(0), json!("")] {
            fs::write(&path, json!({ "past": [], "upcoming": upcoming }).to_string()).unwrap();
            assert_eq!(store.load_upcoming().unwrap(), json!([]), "{upcoming}");
        }

        fs::write(&path, r#"{"upcoming": {"note": "tba"}}"#).unwrap();
        assert_eq!(store.load_upcoming().unwrap(), json!({"note": "tba"}));
    }

    #[test]
    fn test_corrupt_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tournaments.json");
        fs::write(&path, "<html>").unwrap();
        assert!(TournamentStore::new(&path).replace_past(&past()).is_err());
    }
}
