//! Definitions of the traits shared by every container
//!
//! ## Collection
//! The capability set every container offers: size, emptiness, clearing and
//! an ordered snapshot of its values.
//!
//! ## Sequence
//! Index-addressed containers. `Vector` and `SinglyLinkedChain` implement it
//! with identical semantics, so code written against `Sequence` behaves the
//! same on either backing.
//!
//! Element equality is the type's own `PartialEq`.
//!
use crate::error::Result;
use crate::vector::index::Position;

pub trait Collection {
    type Item;
    fn size(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
    fn clear(&mut self);
    /// Ordered copy of the current elements.
    fn values(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone;
}

pub trait Sequence: Collection {
    /// Append to the back.
    fn add(&mut self, element: Self::Item);
    /// Insert before the first element.
    fn add_front(&mut self, element: Self::Item);
    /// Insert so that `element` ends up at `index`, shifting the tail right.
    /// `index == size()` appends.
    fn insert_at<P: Position>(&mut self, index: P, element: Self::Item) -> Result<()>;
    fn get<P: Position>(&self, index: P) -> Result<&Self::Item>;
    /// Remove and return the element at `index`, shifting the tail left.
    fn remove<P: Position>(&mut self, index: P) -> Result<Self::Item>;
    fn index_of(&self, element: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq;
    fn contains(&self, element: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(element).is_some()
    }
}

/// true if every value of `other` is found in `sequence`
pub fn contains_all<S, C>(sequence: &S, other: &C) -> bool
where
    S: Sequence,
    C: Collection<Item = S::Item>,
    S::Item: PartialEq + Clone,
{
    other.values().iter().all(|v| sequence.contains(v))
}
