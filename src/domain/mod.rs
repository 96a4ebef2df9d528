pub mod categories;
pub mod models;
pub mod results;

pub use categories::CategoryTranslator;
pub use models::*;
pub use results::ResultFormatter;
