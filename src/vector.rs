//!
//! `Vector` a contiguous, index-addressable buffer that grows and shrinks
//! under a `GrowthPolicy`
//!
//! Elements live in `0..len` of a block whose capacity is decided by the
//! policy, not by the allocator. Appends are amortized O(1) as long as the
//! growth coefficient is above 1.
//!
use crate::collection::{Collection, Sequence};
use crate::error::{CollectionError, Result};
use itertools::Itertools;
use log::{debug, trace};
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
pub mod index;
pub mod policy;
pub use index::{Offset, Position};
pub use policy::{GrowthPolicy, IndexMode};

/// Growable buffer
///
/// Invariant: `elements.len() <= capacity`, and the backing allocation of
/// `elements` holds at least `capacity` slots.
#[derive(Debug)]
pub struct Vector<T> {
    /// live elements, `0..len`
    elements: Vec<T>,
    /// number of slots reserved by the policy
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> Vector<T> {
    /// Create an empty vector with the 1.5x growth policy.
    pub fn new() -> Vector<T> {
        Vector::from_policy(GrowthPolicy::VECTOR)
    }
    /// Create an empty vector with the 2x growth policy.
    pub fn array_list() -> Vector<T> {
        Vector::from_policy(GrowthPolicy::ARRAY_LIST)
    }
    /// Create an empty vector with a custom policy, rejecting policies that
    /// would break amortized growth.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Vector<T>> {
        policy.validate()?;
        Ok(Vector::from_policy(policy))
    }
    fn from_policy(policy: GrowthPolicy) -> Vector<T> {
        Vector {
            elements: Vec::new(),
            capacity: 0,
            policy,
        }
    }
    /// Create a vector seeded with `values`, in order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Vector<T> {
        let mut vector = Vector::new();
        vector.add_all(values);
        vector
    }
    pub fn policy(&self) -> &GrowthPolicy {
        &self.policy
    }
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn size(&self) -> usize {
        self.elements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    ///
    /// Make room for `additional` more elements.
    /// The new capacity never exceeds what a `Vec<T>` can hold.
    fn extend(&mut self, additional: usize) {
        if let Some(capacity) = self
            .policy
            .grown_capacity(self.size(), self.capacity, additional)
        {
            let limit = isize::MAX as usize / std::mem::size_of::<T>().max(1);
            self.resize(capacity.min(limit).max(self.size() + additional));
        }
    }
    ///
    /// Move every element into a fresh block of `capacity` slots.
    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.size());
        debug!(
            "resize: capacity {} -> {} (len={})",
            self.capacity,
            capacity,
            self.size()
        );
        let mut elements = Vec::with_capacity(capacity);
        elements.extend(self.elements.drain(..));
        self.elements = elements;
        self.capacity = capacity;
    }
    ///
    /// Release unused slots if `len <= shrink * capacity`.
    /// Returns true if the storage was reallocated.
    pub fn shrink(&mut self) -> bool {
        match self.policy.shrunk_capacity(self.size(), self.capacity) {
            Some(capacity) => {
                debug!("shrink: len={} capacity={}", self.size(), self.capacity);
                self.resize(capacity);
                true
            }
            None => false,
        }
    }
    fn element_index<P: Position>(&self, index: P) -> Result<usize> {
        let offset = index.offset();
        offset
            .to_element(self.size(), self.policy.index_mode)
            .ok_or_else(|| self.out_of_bounds(offset))
    }
    fn gap_index<P: Position>(&self, index: P) -> Result<usize> {
        let offset = index.offset();
        offset
            .to_gap(self.size(), self.policy.index_mode)
            .ok_or_else(|| self.out_of_bounds(offset))
    }
    fn out_of_bounds(&self, offset: Offset) -> CollectionError {
        trace!("out of bounds: offset={} len={}", offset, self.size());
        CollectionError::IndexOutOfBounds {
            offset,
            len: self.size(),
        }
    }
    /// Append to the back. Amortized O(1).
    pub fn add(&mut self, element: T) {
        self.extend(1);
        self.elements.push(element);
    }
    pub fn add_back(&mut self, element: T) {
        self.add(element)
    }
    /// Append every value, growing at most once.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return;
        }
        self.extend(values.len());
        self.elements.extend(values);
    }
    /// Insert at index 0, shifting everything right. O(n).
    pub fn add_front(&mut self, element: T) {
        self.extend(1);
        self.elements.insert(0, element);
    }
    /// Insert so that `element` ends up at `index`, `0 <= index <= len`.
    pub fn insert_at<P: Position>(&mut self, index: P, element: T) -> Result<()> {
        let index = self.gap_index(index)?;
        self.extend(1);
        self.elements.insert(index, element);
        Ok(())
    }
    /// Overwrite the element at `index`, returning the previous one.
    pub fn set<P: Position>(&mut self, index: P, element: T) -> Result<T> {
        let index = self.element_index(index)?;
        Ok(std::mem::replace(&mut self.elements[index], element))
    }
    pub fn get<P: Position>(&self, index: P) -> Result<&T> {
        let index = self.element_index(index)?;
        Ok(&self.elements[index])
    }
    /// Remove the element at `index`, shifting the tail left.
    pub fn remove<P: Position>(&mut self, index: P) -> Result<T> {
        let index = self.element_index(index)?;
        let element = self.elements.remove(index);
        if self.policy.auto_shrink {
            self.shrink();
        }
        Ok(element)
    }
    /// Drop every element and release the storage.
    pub fn clear(&mut self) {
        self.elements = Vec::new();
        self.capacity = 0;
    }
    /// Read-only view of `0..len`, in order.
    pub fn values(&self) -> &[T] {
        &self.elements
    }
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

impl<T: PartialEq> Vector<T> {
    /// Linear scan for the first element equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
    pub fn contains(&self, element: &T) -> bool {
        self.index_of(element).is_some()
    }
    pub fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Collection<Item = T>,
        T: Clone,
    {
        crate::collection::contains_all(self, other)
    }
}

impl<T: Clone> Vector<T> {
    /// Copy of `start..end` with the same policy. Requires `start < end <= len`.
    pub fn sub_list<P: Position, Q: Position>(&self, start: P, end: Q) -> Result<Vector<T>> {
        let (start, end) = (start.offset(), end.offset());
        let len = self.size();
        let mode = self.policy.index_mode;
        match (start.to_gap(len, mode), end.to_gap(len, mode)) {
            (Some(s), Some(e)) if s < e => {
                let mut vector = Vector::from_policy(self.policy);
                vector.add_all(self.elements[s..e].iter().cloned());
                Ok(vector)
            }
            _ => Err(CollectionError::InvalidRange { start, end, len }),
        }
    }
}

/// The clone reserves the same capacity as the original.
impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.capacity);
        elements.extend(self.elements.iter().cloned());
        Vector {
            elements,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::new()
    }
}

/// Two vectors are equal if they hold equal elements in the same order.
/// Capacity and policy are ignored.
impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_values(iter)
    }
}

/// Implement index access, vec[i]. Panics when out of bounds.
impl<T> Index<usize> for Vector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.elements.iter().join(", "))
    }
}

impl<T> Collection for Vector<T> {
    type Item = T;
    fn size(&self) -> usize {
        Vector::size(self)
    }
    fn clear(&mut self) {
        Vector::clear(self)
    }
    fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }
}

impl<T> Sequence for Vector<T> {
    fn add(&mut self, element: T) {
        Vector::add(self, element)
    }
    fn add_front(&mut self, element: T) {
        Vector::add_front(self, element)
    }
    fn insert_at<P: Position>(&mut self, index: P, element: T) -> Result<()> {
        Vector::insert_at(self, index, element)
    }
    fn get<P: Position>(&self, index: P) -> Result<&T> {
        Vector::get(self, index)
    }
    fn remove<P: Position>(&mut self, index: P) -> Result<T> {
        Vector::remove(self, index)
    }
    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        Vector::index_of(self, element)
    }
}
