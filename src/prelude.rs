//!
//! globally-available parts
//!
pub use crate::collection::{contains_all, Collection, Sequence};
pub use crate::error::{CollectionError, Result};
pub use crate::linkedlist::SinglyLinkedChain;
pub use crate::stack::Stack;
pub use crate::vector::{GrowthPolicy, IndexMode, Offset, Position, Vector};
pub use crate::{chain, stack, vector};
