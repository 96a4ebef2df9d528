pub mod ranking_fetcher;
pub mod tournament_fetcher;

pub use ranking_fetcher::RankingFetcher;
pub use tournament_fetcher::TournamentFetcher;
