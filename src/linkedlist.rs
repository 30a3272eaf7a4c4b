//! Singly linked chain of owned nodes
//!
//! Every node exclusively owns its successor, so the chain is acyclic and
//! dropping the head releases the whole chain. There is no tail pointer:
//! `append` walks to the end.
//!
//! Positions are always absolute here: `-1` is out of bounds.
//!
use crate::collection::{Collection, Sequence};
use crate::error::{CollectionError, Result};
use crate::vector::index::{Offset, Position};
use crate::vector::policy::IndexMode;
use itertools::Itertools;
use std::fmt;
use std::iter::FromIterator;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

pub struct SinglyLinkedChain<T> {
    head: Link<T>,
    length: usize,
}

impl<T> SinglyLinkedChain<T> {
    pub fn new() -> Self {
        SinglyLinkedChain {
            head: None,
            length: 0,
        }
    }
    /// Build a chain holding `values` in order. O(n).
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let values: Vec<T> = values.into_iter().collect();
        let mut chain = SinglyLinkedChain::new();
        for value in values.into_iter().rev() {
            chain.add_front(value);
        }
        chain
    }
    pub fn size(&self) -> usize {
        self.length
    }
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.next.as_deref())
            .map(|node| &node.value)
    }
    fn element_index<P: Position>(&self, index: P) -> Result<usize> {
        let offset = index.offset();
        offset
            .to_element(self.length, IndexMode::Absolute)
            .ok_or(CollectionError::IndexOutOfBounds {
                offset,
                len: self.length,
            })
    }
    fn gap_index<P: Position>(&self, index: P) -> Result<usize> {
        let offset = index.offset();
        offset
            .to_gap(self.length, IndexMode::Absolute)
            .ok_or(CollectionError::IndexOutOfBounds {
                offset,
                len: self.length,
            })
    }
    ///
    /// The link that owns the `index`-th node (`head` for 0).
    /// `index <= length` must hold.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        debug_assert!(index <= self.length);
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => unreachable!("chain is shorter than its length"),
            }
        }
        link
    }
    /// Link a new node after the last one. O(n).
    pub fn append(&mut self, element: T) {
        let mut link = &mut self.head;
        while let Some(node) = link {
            link = &mut node.next;
        }
        *link = Some(Box::new(Node {
            value: element,
            next: None,
        }));
        self.length += 1;
    }
    pub fn add_back(&mut self, element: T) {
        self.append(element)
    }
    /// Prepend. O(1).
    pub fn add_front(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node {
            value: element,
            next,
        }));
        self.length += 1;
    }
    /// Splice a new node in so that it becomes the `index`-th,
    /// `0 <= index <= len`.
    pub fn insert_at<P: Position>(&mut self, index: P, element: T) -> Result<()> {
        let index = self.gap_index(index)?;
        let link = self.link_mut(index);
        let next = link.take();
        *link = Some(Box::new(Node {
            value: element,
            next,
        }));
        self.length += 1;
        Ok(())
    }
    pub fn get<P: Position>(&self, index: P) -> Result<&T> {
        let index = self.element_index(index)?;
        match self.iter().nth(index) {
            Some(value) => Ok(value),
            None => unreachable!("chain is shorter than its length"),
        }
    }
    /// Unlink the `index`-th node and return its value.
    pub fn remove<P: Position>(&mut self, index: P) -> Result<T> {
        let index = self.element_index(index)?;
        let link = self.link_mut(index);
        match link.take() {
            Some(node) => {
                let Node { value, next } = *node;
                *link = next;
                self.length -= 1;
                Ok(value)
            }
            None => unreachable!("chain is shorter than its length"),
        }
    }
    /// Drop every node. Iterative, so long chains do not overflow the stack.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.length = 0;
    }
}

impl<T: PartialEq> SinglyLinkedChain<T> {
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.iter().position(|v| v == element)
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

impl<T: Clone> SinglyLinkedChain<T> {
    /// Ordered copy of the values.
    pub fn values(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
    /// Copy of `start..end`. Requires `start < end <= len`.
    pub fn sub_list<P: Position, Q: Position>(&self, start: P, end: Q) -> Result<Self> {
        let (start, end): (Offset, Offset) = (start.offset(), end.offset());
        let len = self.length;
        match (
            start.to_gap(len, IndexMode::Absolute),
            end.to_gap(len, IndexMode::Absolute),
        ) {
            (Some(s), Some(e)) if s < e => Ok(self.iter().skip(s).take(e - s).cloned().collect()),
            _ => Err(CollectionError::InvalidRange { start, end, len }),
        }
    }
}

impl<T> Drop for SinglyLinkedChain<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for SinglyLinkedChain<T> {
    fn default() -> Self {
        SinglyLinkedChain::new()
    }
}

impl<T: Clone> Clone for SinglyLinkedChain<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedChain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for SinglyLinkedChain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SinglyLinkedChain::from_values(iter)
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// `[1 -> 2 -> 3]`
impl<T: fmt::Display> fmt::Display for SinglyLinkedChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.iter().join(" -> "))
    }
}

impl<T> Collection for SinglyLinkedChain<T> {
    type Item = T;
    fn size(&self) -> usize {
        self.length
    }
    fn clear(&mut self) {
        SinglyLinkedChain::clear(self)
    }
    fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Sequence for SinglyLinkedChain<T> {
    fn add(&mut self, element: T) {
        self.append(element)
    }
    fn add_front(&mut self, element: T) {
        SinglyLinkedChain::add_front(self, element)
    }
    fn insert_at<P: Position>(&mut self, index: P, element: T) -> Result<()> {
        SinglyLinkedChain::insert_at(self, index, element)
    }
    fn get<P: Position>(&self, index: P) -> Result<&T> {
        SinglyLinkedChain::get(self, index)
    }
    fn remove<P: Position>(&mut self, index: P) -> Result<T> {
        SinglyLinkedChain::remove(self, index)
    }
    fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        SinglyLinkedChain::index_of(self, element)
    }
}
