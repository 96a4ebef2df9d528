use std::path::PathBuf;

use crate::domain::TrackedPlayer;

pub struct HttpSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0",
            timeout_secs: 30,
        }
    }
}

pub struct RankingSettings {
    pub base_url: &'static str,
    pub player_id: &'static str,
    /// Ranking week used when the latest one can't be discovered
    pub base_ranking_id: &'static str,
    pub age_class: &'static str,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.turnier.de",
            player_id: "6388186",
            base_ranking_id: "49291",
            age_class: "13", // U13
        }
    }
}

pub struct TournamentSettings {
    pub base_url: &'static str,
    pub player_guid: &'static str,
    pub years: Vec<u16>,
    pub player_name: &'static str,
    pub given_name: &'static str,
    pub surname_fragments: [&'static str; 2],
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            base_url: "https://dbv.turnier.de",
            player_guid: "2dfc8260-6909-49ca-acb8-ed6068a80116",
            years: vec![2023, 2024, 2025],
            player_name: "Linus de Oliveira Cantante de Matos",
            given_name: "Linus",
            surname_fragments: ["Oliveira", "Matos"],
        }
    }
}

impl TournamentSettings {
    pub fn tracked_player(&self) -> TrackedPlayer {
        TrackedPlayer::new(
            self.player_name,
            self.given_name,
            self.surname_fragments.iter().map(|s| s.to_string()).collect(),
            Some(self.player_guid.to_string()),
        )
    }
}

pub struct AppConfig {
    pub http: HttpSettings,
    pub ranking: RankingSettings,
    pub tournaments: TournamentSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            http: HttpSettings::default(),
            ranking: RankingSettings::default(),
            tournaments: TournamentSettings::default(),
        }
    }
}

/// Directory holding the site's JSON data files (`SITE_DATA_DIR`, else `src/data`).
pub fn data_dir() -> PathBuf {
    std::env::var("SITE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("src").join("data"))
}

pub fn default_profile_path() -> PathBuf {
    data_dir().join("profile.json")
}

pub fn default_tournaments_path() -> PathBuf {
    data_dir().join("tournaments.json")
}
