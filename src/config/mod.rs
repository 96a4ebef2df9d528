pub mod categories;
pub mod settings;

pub use categories::{get_ranking_categories, RankingCategory};
pub use settings::AppConfig;
