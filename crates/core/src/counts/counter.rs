//! Generic group-by counter.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of items sharing one key value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    /// Key value, rendered as a string.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Number of items with that key.
    pub count: usize,
}

impl ItemCount {
    /// Creates a count entry.
    #[must_use]
    pub fn new(item_type: impl Into<String>, count: usize) -> Self {
        Self {
            item_type: item_type.into(),
            count,
        }
    }
}

/// Key wrapper that keeps missing values as their own group.
///
/// `MaybeKey(None)` renders as `"null"`, so records without the field are
/// counted rather than silently dropped. Callers that want them gone filter
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaybeKey<K>(pub Option<K>);

impl<K: fmt::Display> fmt::Display for MaybeKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(key) => key.fmt(f),
            None => f.write_str("null"),
        }
    }
}

/// Counts items per distinct key.
///
/// Makes a single pass and returns one entry per key, in the order each key
/// was first seen. Keys compare by their `Display` form. An empty input
/// yields an empty vector; to count a collection that may be absent, pass
/// `maybe_items.into_iter().flatten()`.
///
/// ```
/// use fundline_core::counts::{ItemCount, types_counts};
///
/// let statuses = ["DRAFT", "PLANNED", "PLANNED"];
/// assert_eq!(
///     types_counts(&statuses, |s| *s),
///     vec![ItemCount::new("DRAFT", 1), ItemCount::new("PLANNED", 2)],
/// );
/// ```
pub fn types_counts<'a, T, I, F, K>(items: I, mut key_of: F) -> Vec<ItemCount>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T) -> K,
    K: fmt::Display,
{
    let mut counts: Vec<ItemCount> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for item in items {
        match positions.entry(key_of(item).to_string()) {
            Entry::Occupied(slot) => counts[*slot.get()].count += 1,
            Entry::Vacant(slot) => {
                counts.push(ItemCount::new(slot.key().clone(), 1));
                slot.insert(counts.len() - 1);
            }
        }
    }

    counts
}
