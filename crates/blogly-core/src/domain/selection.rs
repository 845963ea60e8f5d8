//! Association selections submitted with post and tag forms.

use std::collections::BTreeSet;

/// The set of related ids submitted for a post's tags or a tag's posts.
///
/// The submitted set fully replaces the previous association. Duplicates
/// collapse, and ids that match no row are dropped when the set is resolved
/// against storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(BTreeSet<i32>);

impl Selection {
    pub fn new(ids: impl IntoIterator<Item = i32>) -> Self {
        Self(ids.into_iter().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.0.iter().copied().collect()
    }

    /// Keep only the ids present in `existing`.
    pub fn resolve(&self, existing: impl IntoIterator<Item = i32>) -> Vec<i32> {
        let existing: BTreeSet<i32> = existing.into_iter().collect();
        self.0.intersection(&existing).copied().collect()
    }
}

impl FromIterator<i32> for Selection {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::new(iter)
    }
}
