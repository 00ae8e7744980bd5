//! Client-side filter/sort over a fetched quest list
//!
//! Pure functions over immutable input: `apply_filters` never mutates the
//! list it is given and always returns a fresh ordering, so the controller
//! can re-run it on every filter change without re-fetching.

use nocturne_domain::{Difficulty, Quest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Level,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ephemeral filter state. Not persisted; reset on navigation away.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestFilters {
    /// Case-insensitive substring match against title or description
    pub search: String,
    /// Exact difficulty match when set
    pub difficulty: Option<Difficulty>,
    pub sort: SortKey,
    pub direction: SortDirection,
}

/// Filter and sort a quest list for display.
pub fn apply_filters(quests: &[Quest], filters: &QuestFilters) -> Vec<Quest> {
    let needle = filters.search.trim().to_lowercase();

    let mut result: Vec<Quest> = quests
        .iter()
        .filter(|quest| {
            if !needle.is_empty() {
                let in_title = quest.title.to_lowercase().contains(&needle);
                let in_description = quest.description.to_lowercase().contains(&needle);
                if !in_title && !in_description {
                    return false;
                }
            }
            match filters.difficulty {
                Some(difficulty) => quest.difficulty == difficulty,
                None => true,
            }
        })
        .cloned()
        .collect();

    result.sort_by(|a, b| {
        let ordering = match filters.sort {
            SortKey::Level => a.level.cmp(&b.level),
            SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        };
        match filters.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    result
}
