//!
//! `vec!`-like constructors
//!

/// Create a `Vector` holding the given elements in order.
#[macro_export]
macro_rules! vector {
    () => {
        $crate::vector::Vector::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::vector::Vector::from_values(vec![$($x),+])
    };
}

/// Create a `SinglyLinkedChain` holding the given elements in order.
#[macro_export]
macro_rules! chain {
    () => {
        $crate::linkedlist::SinglyLinkedChain::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::linkedlist::SinglyLinkedChain::from_values(vec![$($x),+])
    };
}

/// Create a `Stack` holding the given elements; the last one is on top.
#[macro_export]
macro_rules! stack {
    () => {
        $crate::stack::Stack::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::stack::Stack::from_values(vec![$($x),+])
    };
}
