//! Category filter for card grids (skills, projects)

/// Filter value that shows every card
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub category: String,
    pub visible: bool,
}

/// One row of filter buttons and the cards it controls
#[derive(Debug, Clone)]
pub struct FilterGroup {
    buttons: Vec<String>,
    active: String,
    cards: Vec<Card>,
}

impl FilterGroup {
    /// All cards start visible with the `all` button active
    pub fn new<B, C>(buttons: B, categories: C) -> Self
    where
        B: IntoIterator,
        B::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            buttons: buttons.into_iter().map(Into::into).collect(),
            active: ALL.to_string(),
            cards: categories
                .into_iter()
                .map(|category| Card {
                    category: category.into(),
                    visible: true,
                })
                .collect(),
        }
    }

    /// Button click: activate `filter` and show matching cards only
    ///
    /// Returns false (and changes nothing) for a filter with no button.
    pub fn select(&mut self, filter: &str) -> bool {
        if !self.buttons.iter().any(|b| b == filter) {
            return false;
        }
        self.active = filter.to_string();
        for card in &mut self.cards {
            card.visible = filter == ALL || card.category == filter;
        }
        true
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills() -> FilterGroup {
        FilterGroup::new(
            ["all", "frontend", "backend", "security"],
            ["frontend", "backend", "backend", "security", "frontend"],
        )
    }

    #[test]
    fn test_initial_state() {
        let group = skills();
        assert_eq!(group.active(), "all");
        assert_eq!(group.visible_count(), 5);
    }

    #[test]
    fn test_select_category() {
        let mut group = skills();
        assert!(group.select("backend"));
        assert_eq!(group.active(), "backend");
        assert_eq!(group.visible_count(), 2);
        assert!(group
            .cards()
            .iter()
            .all(|c| c.visible == (c.category == "backend")));
    }

    #[test]
    fn test_all_restores_every_card() {
        let mut group = skills();
        group.select("security");
        group.select("all");
        assert_eq!(group.visible_count(), 5);
    }

    #[test]
    fn test_unknown_filter_ignored() {
        let mut group = skills();
        group.select("frontend");
        assert!(!group.select("design"));
        assert_eq!(group.active(), "frontend");
        assert_eq!(group.visible_count(), 2);
    }
}
