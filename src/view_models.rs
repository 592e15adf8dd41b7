use crate::model::{Category, Level};
use crate::stats::CategoryStatus;

/// One category card on the home page and dashboard.
pub struct CategoryCard {
    pub category: Category,
    pub title: &'static str,
    pub blurb: &'static str,
    pub status: CategoryStatus,
}

/// One difficulty row in the level menu.
pub struct LevelRow {
    pub level: Level,
    pub question_count: usize,
}

/// One bar in the dashboard score distribution (completed categories only).
pub struct ScoreRow {
    pub key: String,
    pub percentage: f32,
}
