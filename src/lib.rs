//! Provides a doubly linked list addressed by position.
//!
//! [`LinkedList`] keeps O(1) access to both ends, seeks indexed elements
//! from whichever end of the chain is nearer, and hands out detached
//! [`Cursor`]s that fail fast with an error when the list is structurally
//! modified behind them.
pub mod cell;
pub mod cursor;
pub mod linked_list;

pub use crate::{
    cell::LinkedListCell,
    cursor::{Cursor, CursorError},
    linked_list::{IndexError, IntoIter, Iter, IterMut, LinkedList, PositionInsert},
};
