pub mod json_file;
pub mod profile;
pub mod tournaments;

pub use json_file::JsonFile;
pub use profile::{ProfileStore, RankingChange};
pub use tournaments::TournamentStore;
