//! Find-or-create reconciliation
//!
//! Several flows look up an existing remote resource by key before deciding
//! whether to create a new one: variables are updated when their key already
//! exists in the workspace, and a pending configuration version is reused when
//! the operator picks its ID. Both go through [`reconcile`].

use crate::hcp::traits::TfeResource;

/// Outcome of looking up a key among existing resources
#[derive(Debug, PartialEq, Eq)]
pub enum Reconcile<'a, T> {
    /// A resource with the key exists and should be reused/updated
    Existing(&'a T),
    /// Nothing matches; a new resource must be created
    Create,
}

impl<'a, T> Reconcile<'a, T> {
    pub fn existing(&self) -> Option<&'a T> {
        match self {
            Reconcile::Existing(item) => Some(item),
            Reconcile::Create => None,
        }
    }
}

/// Find the resource whose name equals `key`, or signal creation
///
/// An empty key never matches.
pub fn reconcile<'a, T: TfeResource>(existing: &'a [T], key: &str) -> Reconcile<'a, T> {
    if key.is_empty() {
        return Reconcile::Create;
    }
    existing
        .iter()
        .find(|item| item.name() == key)
        .map_or(Reconcile::Create, Reconcile::Existing)
}
