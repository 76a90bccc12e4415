//! Filtering logic

use super::App;
use crate::catalog::{self, PRODUCTS};
use crate::constants::ALL_CATEGORIES;
use tracing::debug;

impl App {
    pub fn apply_filters(&mut self) {
        self.filtered = catalog::filter(&PRODUCTS, &self.search_query, self.selected_category);
        debug!(
            query = %self.search_query,
            category = self.selected_category,
            matches = self.filtered.len(),
            "Filters applied"
        );
    }

    /// Select a category by id. Unknown ids are ignored.
    pub fn select_category(&mut self, id: &str) {
        let Some(category) = catalog::category_by_id(id) else {
            return;
        };
        if category.id != self.selected_category {
            self.selected_category = category.id;
            self.apply_filters();
        }
    }

    pub fn clear_filters(&mut self) {
        self.search_query.clear();
        self.selected_category = ALL_CATEGORIES;
        self.apply_filters();
    }

    /// Keystrokes captured while no text field has focus.
    /// Returns true if the search query changed.
    pub fn type_into_search(&mut self, typed: &str, backspace: bool) -> bool {
        let mut changed = false;
        if !typed.is_empty() {
            self.search_query.push_str(typed);
            changed = true;
        }
        if backspace && self.search_query.pop().is_some() {
            changed = true;
        }
        if changed {
            self.focus_search = true;
            self.apply_filters();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::test_app;

    fn names(app: &super::App) -> Vec<&'static str> {
        app.filtered.iter().map(|p| p.name).collect()
    }

    #[test]
    fn search_narrows_results() {
        let mut app = test_app();
        app.search_query = "tomato".into();
        app.apply_filters();
        assert_eq!(names(&app), vec!["Fresh Tomatoes"]);
    }

    #[test]
    fn selecting_category_refilters() {
        let mut app = test_app();
        app.select_category("vegetables");
        assert_eq!(app.selected_category, "vegetables");
        assert_eq!(
            names(&app),
            vec!["Fresh Spinach", "Fresh Tomatoes", "Fresh Potatoes"]
        );
    }

    #[test]
    fn unknown_category_is_ignored() {
        let mut app = test_app();
        app.select_category("oils");
        app.select_category("toys");
        assert_eq!(app.selected_category, "oils");
        assert_eq!(names(&app), vec!["Mustard Oil"]);
    }

    #[test]
    fn no_match_leaves_empty_grid() {
        let mut app = test_app();
        app.search_query = "xyz-no-match".into();
        app.apply_filters();
        assert!(app.filtered.is_empty());

        app.clear_filters();
        assert_eq!(app.filtered.len(), 8);
        assert!(app.search_query.is_empty());
    }

    #[test]
    fn typing_anywhere_updates_search() {
        let mut app = test_app();
        assert!(app.type_into_search("mil", false));
        assert!(app.focus_search);
        assert_eq!(app.search_query, "mil");
        assert_eq!(names(&app), vec!["Fresh Milk"]);

        assert!(app.type_into_search("", true));
        assert_eq!(app.search_query, "mi");
    }

    #[test]
    fn backspace_on_empty_search_is_noop() {
        let mut app = test_app();
        assert!(!app.type_into_search("", true));
        assert!(!app.focus_search);
    }
}
