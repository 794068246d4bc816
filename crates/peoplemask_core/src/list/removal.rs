//! Criterion and strategy based removal.
//!
//! # Responsibility
//! - Suggest removal candidates with a criterion evaluated per item.
//! - Let a strategy narrow the suggestion before anything is deleted.
//!
//! # Invariants
//! - A strategy may only shrink the suggestion. Positions outside it are
//!   rejected by the caller before mutation.
//! - Suggestions are ascending list positions.

use super::item::{HasDateValue, HasStringValue, HasTypeTag, ItemKind, ItemRef};
use crate::model::DateValue;

/// Decides whether one item is a removal candidate.
///
/// Functions of shape `Fn(&ItemRef<'_, K>) -> bool` are criteria too.
pub trait RemoveCriterion<K: ItemKind> {
    fn applies(&self, item: &ItemRef<'_, K>) -> bool;
}

impl<K, F> RemoveCriterion<K> for F
where
    K: ItemKind,
    F: Fn(&ItemRef<'_, K>) -> bool,
{
    fn applies(&self, item: &ItemRef<'_, K>) -> bool {
        self(item)
    }
}

/// Every item is a candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl<K: ItemKind> RemoveCriterion<K> for MatchAll {
    fn applies(&self, _item: &ItemRef<'_, K>) -> bool {
        true
    }
}

/// Items whose `value` equals the given string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStringValue(pub String);

impl<K: HasStringValue> RemoveCriterion<K> for MatchStringValue {
    fn applies(&self, item: &ItemRef<'_, K>) -> bool {
        item.value() == self.0
    }
}

/// Items tagged with the given non-empty type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchTypeTag(pub String);

impl<K: HasTypeTag> RemoveCriterion<K> for MatchTypeTag {
    fn applies(&self, item: &ItemRef<'_, K>) -> bool {
        item.has_type(&self.0)
    }
}

/// Items whose decoded date equals the given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchDateValue(pub DateValue);

impl<K: HasDateValue> RemoveCriterion<K> for MatchDateValue {
    fn applies(&self, item: &ItemRef<'_, K>) -> bool {
        item.date_value() == Some(self.0)
    }
}

/// Positions of all items the criterion applies to, ascending.
pub fn select_candidates<'v, K, C>(
    criterion: &C,
    items: impl IntoIterator<Item = ItemRef<'v, K>>,
) -> Vec<usize>
where
    K: ItemKind,
    C: RemoveCriterion<K> + ?Sized,
{
    items
        .into_iter()
        .enumerate()
        .filter(|(_, item)| criterion.applies(item))
        .map(|(index, _)| index)
        .collect()
}

/// Narrows suggested positions to the ones actually removed.
///
/// Functions of shape `Fn(&[usize]) -> Vec<usize>` are strategies too.
pub trait RemovalStrategy {
    fn narrow(&self, suggested: &[usize]) -> Vec<usize>;
}

impl<F> RemovalStrategy for F
where
    F: Fn(&[usize]) -> Vec<usize>,
{
    fn narrow(&self, suggested: &[usize]) -> Vec<usize> {
        self(suggested)
    }
}

/// Built-in removal strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Removal {
    /// Every suggested item.
    #[default]
    All,
    /// Only the first suggested item.
    FirstOnly,
    /// Every suggested item but the first. Used for de-duplication.
    AllExceptFirst,
}

impl RemovalStrategy for Removal {
    fn narrow(&self, suggested: &[usize]) -> Vec<usize> {
        match self {
            Self::All => suggested.to_vec(),
            Self::FirstOnly => suggested.iter().take(1).copied().collect(),
            Self::AllExceptFirst => suggested.iter().skip(1).copied().collect(),
        }
    }
}
