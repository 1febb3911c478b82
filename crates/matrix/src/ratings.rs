//! The sparse user×movie rating matrix.
//!
//! Cells are keyed by (user, title column); a missing cell means "not
//! rated", never zero. The matrix keeps both a row view (user → ratings)
//! and a column view (title → ratings) so the user-based and item-based
//! paths each read along their natural axis without transposing.

use data_loader::UserId;
use std::collections::HashMap;

/// Index of a title column in the matrix
pub type TitleId = usize;

/// Sparse user×movie rating matrix, built once and read-only afterward.
#[derive(Debug, Default)]
pub struct RatingMatrix {
    /// Column id → title. Owns the title strings.
    titles: Vec<String>,
    /// Title → column id
    title_index: HashMap<String, TitleId>,
    /// Row view: user → {column → rating}
    rows: HashMap<UserId, HashMap<TitleId, f32>>,
    /// Column view: column → {user → rating}
    columns: HashMap<TitleId, HashMap<UserId, f32>>,
}

impl RatingMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a title, returning its column id
    pub(crate) fn add_title(&mut self, title: &str) -> TitleId {
        if let Some(&id) = self.title_index.get(title) {
            return id;
        }
        let id = self.titles.len();
        self.titles.push(title.to_string());
        self.title_index.insert(title.to_string(), id);
        id
    }

    /// Set a cell in both views
    pub(crate) fn set(&mut self, user_id: UserId, title_id: TitleId, rating: f32) {
        self.rows.entry(user_id).or_default().insert(title_id, rating);
        self.columns.entry(title_id).or_default().insert(user_id, rating);
    }

    /// Look up the column id for a title
    pub fn title_id(&self, title: &str) -> Option<TitleId> {
        self.title_index.get(title).copied()
    }

    /// Title for a column id
    pub fn title(&self, id: TitleId) -> &str {
        &self.titles[id]
    }

    /// All retained titles, in column order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// A user's row: {column → rating}, absent columns unrated
    pub fn user_row(&self, user_id: UserId) -> Option<&HashMap<TitleId, f32>> {
        self.rows.get(&user_id)
    }

    /// A title's column: {user → rating}, absent users unrated
    pub fn column(&self, title_id: TitleId) -> Option<&HashMap<UserId, f32>> {
        self.columns.get(&title_id)
    }

    /// Iterate over all (user, row) pairs
    pub fn rows(&self) -> impl Iterator<Item = (UserId, &HashMap<TitleId, f32>)> {
        self.rows.iter().map(|(&user_id, row)| (user_id, row))
    }

    /// All user ids present in the matrix, sorted for determinism
    pub fn user_ids(&self) -> Vec<UserId> {
        let mut ids: Vec<UserId> = self.rows.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.rows.contains_key(&user_id)
    }

    pub fn num_users(&self) -> usize {
        self.rows.len()
    }

    pub fn num_titles(&self) -> usize {
        self.titles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_title_interns() {
        let mut matrix = RatingMatrix::new();
        let a = matrix.add_title("A");
        let b = matrix.add_title("B");
        let a_again = matrix.add_title("A");

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(matrix.num_titles(), 2);
        assert_eq!(matrix.title(a), "A");
        assert_eq!(matrix.title_id("B"), Some(b));
    }

    #[test]
    fn test_set_updates_both_views() {
        let mut matrix = RatingMatrix::new();
        let col = matrix.add_title("A");
        matrix.set(1, col, 4.5);

        assert_eq!(matrix.user_row(1).unwrap().get(&col), Some(&4.5));
        assert_eq!(matrix.column(col).unwrap().get(&1), Some(&4.5));
    }

    #[test]
    fn test_absent_means_unrated() {
        let mut matrix = RatingMatrix::new();
        let col = matrix.add_title("A");
        matrix.set(1, col, 4.5);

        // User 2 never rated anything: no row at all, not a zero-filled one
        assert!(matrix.user_row(2).is_none());
        assert!(matrix.column(col).unwrap().get(&2).is_none());
    }

    #[test]
    fn test_user_ids_sorted() {
        let mut matrix = RatingMatrix::new();
        let col = matrix.add_title("A");
        matrix.set(30, col, 1.0);
        matrix.set(10, col, 2.0);
        matrix.set(20, col, 3.0);

        assert_eq!(matrix.user_ids(), vec![10, 20, 30]);
    }
}
