// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;

use crate::{StyleKind, StyleOperation};

/// A set of active style operations.
///
/// This is the derived view of a [`StyleAttributes`](crate::StyleAttributes) bundle, and the
/// shape in which active styles are reported to toolbars.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSet {
    ops: HashSet<StyleOperation>,
}

impl StyleSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of operations in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Adds an operation, returning `true` if it was not present.
    pub fn insert(&mut self, op: StyleOperation) -> bool {
        self.ops.insert(op)
    }

    /// Returns `true` if exactly `op` is in the set.
    pub fn contains(&self, op: &StyleOperation) -> bool {
        self.ops.contains(op)
    }

    /// Returns `true` if some member matches `op`, treating `op`'s wildcards as "any value".
    pub fn contains_matching(&self, op: &StyleOperation) -> bool {
        if !op.is_wildcard() {
            return self.contains(op);
        }
        self.ops.iter().any(|member| op.matches(member))
    }

    /// Returns `true` if some member refers to the concept `kind`.
    pub fn contains_kind(&self, kind: StyleKind) -> bool {
        self.ops.iter().any(|member| member.kind() == kind)
    }

    /// Returns the members present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.ops.intersection(&other.ops).cloned().collect()
    }

    /// Iterates the members in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &StyleOperation> {
        self.ops.iter()
    }
}

impl FromIterator<StyleOperation> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleOperation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a StyleSet {
    type Item = &'a StyleOperation;
    type IntoIter = hashbrown::hash_set::Iter<'a, StyleOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::StyleSet;
    use crate::{Color, HeaderLevel, StyleKind, StyleOperation};

    #[test]
    fn matching_and_kinds() {
        let mut set = StyleSet::new();
        assert!(set.insert(StyleOperation::Bold));
        assert!(!set.insert(StyleOperation::Bold));
        set.insert(StyleOperation::Header(Some(HeaderLevel::H2)));

        assert!(set.contains_matching(&StyleOperation::Header(None)));
        assert!(!set.contains_matching(&StyleOperation::Header(Some(HeaderLevel::H1))));
        assert!(set.contains_kind(StyleKind::Header));
        assert!(!set.contains_kind(StyleKind::List));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn intersection_keeps_common_members() {
        let a: StyleSet = [
            StyleOperation::Bold,
            StyleOperation::Color(Some(Color::BLACK)),
        ]
        .into_iter()
        .collect();
        let b: StyleSet = [StyleOperation::Bold, StyleOperation::Italic]
            .into_iter()
            .collect();
        let both = a.intersection(&b);
        assert_eq!(both.len(), 1);
        assert!(both.contains(&StyleOperation::Bold));
    }
}
