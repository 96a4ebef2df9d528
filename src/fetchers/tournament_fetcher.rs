use anyhow::Result;
use log::info;

use crate::config::settings::{HttpSettings, TournamentSettings};
use crate::http::SiteSession;

/// Fetches a player's per-year tournament pages from the tournament site
pub struct TournamentFetcher {
    session: SiteSession,
    player_guid: String,
}

impl TournamentFetcher {
    pub fn new(settings: &TournamentSettings, http: &HttpSettings) -> Result<Self> {
        Ok(Self {
            session: SiteSession::new(settings.base_url, http)?,
            player_guid: settings.player_guid.to_string(),
        })
    }

    /// Accept the cookie wall once; the session keeps the consent cookie.
    pub async fn accept_consent(&self, year: u16) -> Result<()> {
        self.session.accept_consent(&self.build_year_path(year)).await
    }

    pub async fn fetch_year(&self, year: u16) -> Result<String> {
        info!("Fetching {} tournaments...", year);
        let url = self.session.url(&self.build_year_path(year));
        self.session.get_text(&url).await
    }

    fn build_year_path(&self, year: u16) -> String {
        format!("/player-profile/{}/tournaments/{}", self.player_guid, year)
    }
}
