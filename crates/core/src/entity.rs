//! Things the catalog tracks by id rather than by value.

/// A record whose identity is its id: two fetches of the same product are the
/// same entity even if a field changed upstream.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;

    /// Lookup predicate used by catalog scans.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
