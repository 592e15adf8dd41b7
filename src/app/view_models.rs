use super::*;
use crate::stats::{self, CategoryStatus};

impl LearnApp {
    pub fn category_cards(&self) -> Vec<CategoryCard> {
        let records = self.records();
        Category::ALL
            .into_iter()
            .map(|category| CategoryCard {
                category,
                title: category.title(),
                blurb: category.blurb(),
                status: stats::category_status(&records, category),
            })
            .collect()
    }

    pub fn level_rows(&self, category: Category) -> Vec<LevelRow> {
        Level::ALL
            .into_iter()
            .map(|level| LevelRow {
                level,
                question_count: self.bank.question_count(category, level),
            })
            .collect()
    }

    /// Bars for the dashboard score distribution, completed categories only.
    pub fn score_rows(&self) -> Vec<ScoreRow> {
        let records = self.records();
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                match stats::category_status(&records, category) {
                    CategoryStatus::Completed { percentage, .. } => Some(ScoreRow {
                        key: category.key().to_owned(),
                        percentage,
                    }),
                    CategoryStatus::NotAttempted => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::ProgressStore;
    use crate::stats::CategoryStatus;

    #[test]
    fn cards_distinguish_attempted_from_untouched() {
        let mut app = LearnApp::with_store(ProgressStore::in_memory());
        app.store.save(Category::Css, 0, 6);
        let cards = app.category_cards();
        assert_eq!(cards.len(), 3);
        let css = cards
            .iter()
            .find(|c| c.category == Category::Css)
            .unwrap();
        assert!(matches!(
            css.status,
            CategoryStatus::Completed { score: 0, .. }
        ));
        let html = cards
            .iter()
            .find(|c| c.category == Category::Html)
            .unwrap();
        assert!(matches!(html.status, CategoryStatus::NotAttempted));
    }

    #[test]
    fn score_rows_skip_unattempted_categories() {
        let mut app = LearnApp::with_store(ProgressStore::in_memory());
        app.store.save(Category::Html, 3, 6);
        let rows = app.score_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "html");
        assert!((rows[0].percentage - 50.0).abs() < 1e-4);
    }

    #[test]
    fn level_rows_report_bank_sizes() {
        let app = LearnApp::with_store(ProgressStore::in_memory());
        let rows = app.level_rows(Category::Html);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.question_count > 0));
    }
}
