pub mod categories;
pub mod entities;
pub mod matches;
pub mod partner;
pub mod placement;
pub mod rankings;
pub mod rules;
pub mod tournaments;

pub use entities::decode_html_entities;
pub use partner::{build_strategy, PartnerStrategy, PartnerStrategyKind};
pub use placement::determine_placement;
pub use rankings::RankingPageParser;
pub use tournaments::TournamentParser;
