//! Category filters for the gallery and the shop grid.

/// The value a filter control is set to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    /// `"all"`: every item is visible.
    All,
    /// Only items whose category equals this value are visible.
    Only(String),
}

impl CategoryFilter {
    /// Reserved value that shows everything.
    pub const ALL: &'static str = "all";

    /// Interpret a `data-filter` attribute or select value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Only(value.to_owned())
        }
    }

    /// Whether an item with `category` (its `data-category`, if any) shows.
    #[must_use]
    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => category == Some(wanted.as_str()),
        }
    }

    /// Visibility for each item, in order.
    pub fn visibility<'a, I>(&self, categories: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        categories.into_iter().map(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shows_everything() {
        let filter = CategoryFilter::parse("all");
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(
            filter.visibility([Some("lashes"), None, Some("brows")]),
            vec![true, true, true]
        );
    }

    #[test]
    fn test_only_matches_exact_category() {
        let filter = CategoryFilter::parse("brows");
        assert_eq!(
            filter.visibility([Some("lashes"), None, Some("brows"), Some("Brows")]),
            vec![false, false, true, false]
        );
    }

    #[test]
    fn test_empty_filter_value_is_a_category() {
        let filter = CategoryFilter::parse("");
        assert!(filter.matches(Some("")));
        assert!(!filter.matches(None));
    }
}
