use crate::domain::CategoryType;

/// Ranking list of one discipline on the federation ranking site
///
/// The ids come from the ranking site's category links:
/// `ranking/category.aspx?id={week}&category={id}&{filter_param}={age}`.
#[derive(Debug, Clone)]
pub struct RankingCategory {
    pub kind: CategoryType,
    pub id: &'static str,
    pub filter_param: &'static str,
}

impl RankingCategory {
    pub fn new(kind: CategoryType, id: &'static str, filter_param: &'static str) -> Self {
        Self { kind, id, filter_param }
    }
}

/// Ranking lists tracked for the profile
pub fn get_ranking_categories() -> Vec<RankingCategory> {
    vec![
        RankingCategory::new(CategoryType::Singles, "3367", "C3367CS"),
        RankingCategory::new(CategoryType::Doubles, "3369", "C3369CS"),
        RankingCategory::new(CategoryType::Mixed, "3440", "C3440CS"),
    ]
}
