pub mod rankings;
pub mod report;
pub mod tournaments;

pub use rankings::{RankingOutcome, RankingService};
pub use tournaments::TournamentService;
