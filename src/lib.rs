//! Linear collections
//!
//! * `vector::Vector` growable buffer with a configurable growth/shrink policy
//! * `linkedlist::SinglyLinkedChain` forward-only chain of owned nodes
//! * `stack::Stack` LIFO adapter over `Vector`
//!
//! ```
//! use linear::prelude::*;
//!
//! let mut v = vector![10, 20, 30];
//! assert_eq!(*v.get(2).unwrap(), 30);
//! v.remove(1).unwrap();
//! assert_eq!(v.values(), &[10, 30]);
//!
//! let mut s = stack![1, 2, 3];
//! assert_eq!(s.pop().unwrap(), 3);
//! ```
#[macro_use]
mod macros;
pub mod collection;
pub mod error;
pub mod linkedlist;
pub mod prelude;
pub mod stack;
pub mod vector;
