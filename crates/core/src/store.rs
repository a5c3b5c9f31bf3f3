// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Storage seam for the allocator.
//!
//! The allocator never caches the running maximum: every call goes back to
//! the store, so results are only as fresh as the store's reads.

use crate::error::Result;
use crate::scheme::NumberingScheme;

/// Entity identifier inside a multi-entity installation.
pub type EntityId = i64;

/// Set of entities whose references share one numbering sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    entities: Vec<EntityId>,
}

impl Scope {
    /// Scope covering a single entity.
    pub fn entity(id: EntityId) -> Self {
        Scope { entities: vec![id] }
    }

    /// Scope covering several entities that share numbering.
    ///
    /// Duplicates are removed; an empty list falls back to entity 1.
    pub fn shared(ids: impl IntoIterator<Item = EntityId>) -> Self {
        let mut entities: Vec<EntityId> = ids.into_iter().collect();
        entities.sort_unstable();
        entities.dedup();
        if entities.is_empty() {
            entities.push(1);
        }
        Scope { entities }
    }

    pub fn entities(&self) -> &[EntityId] {
        &self.entities
    }
}

/// Read access to stored references.
pub trait ReferenceStore {
    /// Largest suffix among references of `scheme` in `scope`, `None` if there are none.
    fn max_suffix(&self, scheme: &NumberingScheme, scope: &Scope) -> Result<Option<u64>>;

    /// The stored reference holding the largest suffix.
    ///
    /// Ties on the suffix resolve to the lexicographically greatest reference.
    fn max_reference(&self, scheme: &NumberingScheme, scope: &Scope) -> Result<Option<String>>;

    /// Lexicographically greatest reference `prefix + <any window> + '-' + suffix`.
    fn latest_with_suffix(
        &self,
        scheme: &NumberingScheme,
        scope: &Scope,
        suffix: &str,
    ) -> Result<Option<String>>;
}

impl<T: ReferenceStore + ?Sized> ReferenceStore for &T {
    fn max_suffix(&self, scheme: &NumberingScheme, scope: &Scope) -> Result<Option<u64>> {
        (**self).max_suffix(scheme, scope)
    }

    fn max_reference(&self, scheme: &NumberingScheme, scope: &Scope) -> Result<Option<String>> {
        (**self).max_reference(scheme, scope)
    }

    fn latest_with_suffix(
        &self,
        scheme: &NumberingScheme,
        scope: &Scope,
        suffix: &str,
    ) -> Result<Option<String>> {
        (**self).latest_with_suffix(scheme, scope, suffix)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
