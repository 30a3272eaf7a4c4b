//!
//! Stack — LIFO adapter over `Vector`
//!
//! push(x): vector.add(x)             O(1) amortised
//! pop():   vector.remove(len - 1)    O(1)
//! peek():  vector.get(len - 1)       O(1)
//!
use crate::collection::Collection;
use crate::error::{CollectionError, Result};
use crate::vector::{GrowthPolicy, Vector};
use std::iter::FromIterator;

/// Top of the stack is the highest index of the vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Stack<T> {
    vector: Vector<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            vector: Vector::new(),
        }
    }
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self> {
        Ok(Stack {
            vector: Vector::with_policy(policy)?,
        })
    }
    /// Push `values` in order; the last one ends up on top.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Stack {
            vector: Vector::from_values(values),
        }
    }
    pub fn push(&mut self, element: T) {
        self.vector.add_back(element)
    }
    /// Alias of `push`: the front of a stack is its top.
    pub fn add_front(&mut self, element: T) {
        self.push(element)
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vector.size() {
            0 => Err(CollectionError::EmptyContainer),
            n => self.vector.remove(n - 1),
        }
    }
    pub fn peek(&self) -> Result<&T> {
        match self.vector.size() {
            0 => Err(CollectionError::EmptyContainer),
            n => self.vector.get(n - 1),
        }
    }
    pub fn size(&self) -> usize {
        self.vector.size()
    }
    pub fn is_empty(&self) -> bool {
        self.vector.is_empty()
    }
    pub fn clear(&mut self) {
        self.vector.clear()
    }
    /// Bottom-to-top view of the stack.
    pub fn values(&self) -> &[T] {
        self.vector.values()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack::from_values(iter)
    }
}

impl<T> Collection for Stack<T> {
    type Item = T;
    fn size(&self) -> usize {
        self.vector.size()
    }
    fn clear(&mut self) {
        self.vector.clear()
    }
    fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.vector.values().to_vec()
    }
}
