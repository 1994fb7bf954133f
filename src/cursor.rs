//! Detached fail-fast cursors over [`LinkedList`].
//!
//! A [`Cursor`] is a position token, not a borrowing iterator: it holds no
//! reference to its list between calls, so any number of cursors can be
//! outstanding while the owner keeps full use of the list. The price is
//! that every cursor operation takes the list as an argument and validates
//! it first — a cursor presented with the wrong list, or with a list that
//! was structurally modified since the cursor last observed it, reports an
//! error instead of walking freed or relocated structure.
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use quick_error::quick_error;

use crate::linked_list::{LinkedList, Node};

quick_error! {
    /// The error returned by cursor operations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CursorError {
        /// `next` was called after the cursor passed the last element.
        Exhausted {
            display("cursor has passed the last element")
        }
        /// `remove` was called before a `next`, or twice without an
        /// intervening `next`.
        NoPendingRemove {
            display("no element has been yielded since the last removal or reset")
        }
        /// The list was structurally modified (insertion, removal, clear,
        /// splice) other than through this cursor since the cursor last
        /// observed it.
        Invalidated {
            display("list was structurally modified behind the cursor")
        }
        /// The list passed to this operation is not the one the cursor was
        /// created from.
        ForeignList {
            display("cursor does not belong to this list")
        }
    }
}

/// A one-pass forward cursor over a [`LinkedList`], restartable via
/// [`reset`], supporting removal mid-traversal.
///
/// Created by [`LinkedList::cursor`]. Every operation takes the owning
/// list by reference and checks, before touching any node, that it is the
/// same list (by process-unique identity) in the same structural state
/// (by version) the cursor last observed. Anything else is reported as
/// [`CursorError::ForeignList`] or [`CursorError::Invalidated`].
///
/// # Removal is by value
///
/// [`remove`] takes out the first element of the list that compares equal
/// to the one most recently yielded by [`next`] — the same scan
/// [`LinkedList::remove_item`] performs. When the list holds duplicates,
/// the removed occurrence can therefore sit *before* the one the cursor
/// just visited. Callers iterating a list with duplicate values must not
/// assume the removed element is positionally the one just yielded.
///
/// ```
/// use indexed_linked_list::LinkedList;
///
/// let mut list: LinkedList<u32> = vec![1, 2, 1].into_iter().collect();
/// let mut cursor = list.cursor();
///
/// cursor.next(&list).unwrap(); // yields the first 1
/// cursor.next(&list).unwrap(); // yields 2
/// cursor.next(&list).unwrap(); // yields the *second* 1
///
/// // Removes the first occurrence of 1, not the element just yielded.
/// assert_eq!(cursor.remove(&mut list), Ok(1));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
/// ```
///
/// [`reset`]: Cursor::reset
/// [`remove`]: Cursor::remove
/// [`next`]: Cursor::next
pub struct Cursor<T> {
    /// Identity of the owning list, per `LinkedList::identity`.
    owner: u64,
    /// Structural version of the owner as of the last synchronization.
    version: u64,
    /// Node to be yielded by the next `next` call; `None` once exhausted.
    current: Option<NonNull<Node<T>>>,
    /// Node most recently yielded, kept for `remove`.
    prior: Option<NonNull<Node<T>>>,
    remove_ok: bool,
    marker: PhantomData<*const T>,
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("owner", &self.owner)
            .field("version", &self.version)
            .field("exhausted", &self.current.is_none())
            .finish()
    }
}

impl<T> Cursor<T> {
    pub(crate) fn new(list: &LinkedList<T>) -> Self {
        Cursor {
            owner: list.identity(),
            version: list.structural_version(),
            current: list.head_node(),
            prior: None,
            remove_ok: false,
            marker: PhantomData,
        }
    }

    /// Fails unless `list` is the cursor's owner in the structural state
    /// the cursor last observed.
    fn ensure_current(&self, list: &LinkedList<T>) -> Result<(), CursorError> {
        // An owner id is never zero and never reused, so a raw mismatch
        // (including an unassigned id) proves this is a different list.
        if list.raw_identity() != self.owner {
            return Err(CursorError::ForeignList);
        }
        if list.structural_version() != self.version {
            return Err(CursorError::Invalidated);
        }
        Ok(())
    }

    /// Returns `true` if the cursor has not yet passed the last element.
    ///
    /// Reflects the traversal state as of the last synchronization with
    /// the list; it touches no node and cannot detect a stale cursor —
    /// [`next`] reports that case.
    ///
    /// [`next`]: Cursor::next
    #[inline]
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Yields a reference to the next element, front to back, and arms
    /// [`remove`].
    ///
    /// # Errors
    ///
    /// [`CursorError::Exhausted`] past the last element;
    /// [`CursorError::Invalidated`] / [`CursorError::ForeignList`] when
    /// the validation described on [`Cursor`] fails.
    ///
    /// [`remove`]: Cursor::remove
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_linked_list::{CursorError, LinkedList};
    ///
    /// let list: LinkedList<u32> = vec![1, 2].into_iter().collect();
    /// let mut cursor = list.cursor();
    ///
    /// assert_eq!(cursor.next(&list), Ok(&1));
    /// assert_eq!(cursor.next(&list), Ok(&2));
    /// assert_eq!(cursor.next(&list), Err(CursorError::Exhausted));
    /// ```
    pub fn next<'a>(&mut self, list: &'a LinkedList<T>) -> Result<&'a T, CursorError> {
        self.ensure_current(list)?;
        let node = self.current.ok_or(CursorError::Exhausted)?;

        self.prior = Some(node);
        self.remove_ok = true;
        unsafe {
            self.current = (*node.as_ptr()).next;
            Ok(&(*node.as_ptr()).element)
        }
    }

    /// Removes the first element of the list equal to the one most
    /// recently yielded by [`next`], and returns it. See the type-level
    /// note on duplicate values. Disarms itself; a further `remove`
    /// without an intervening `next` is an error.
    ///
    /// The removal re-synchronizes this cursor, so traversal can continue;
    /// other outstanding cursors over the same list become invalidated.
    ///
    /// # Errors
    ///
    /// [`CursorError::NoPendingRemove`] unless armed by a [`next`] since
    /// construction, the last `remove`, or the last [`reset`];
    /// [`CursorError::Invalidated`] / [`CursorError::ForeignList`] when
    /// the validation described on [`Cursor`] fails.
    ///
    /// [`next`]: Cursor::next
    /// [`reset`]: Cursor::reset
    pub fn remove(&mut self, list: &mut LinkedList<T>) -> Result<T, CursorError>
    where
        T: PartialEq,
    {
        self.ensure_current(list)?;
        if !self.remove_ok {
            return Err(CursorError::NoPendingRemove);
        }
        let prior = self.prior.expect("armed cursor has yielded a node");

        let removed = list.remove_first_match(prior);
        self.prior = None;
        self.remove_ok = false;
        self.version = list.structural_version();
        Ok(removed)
    }

    /// Restarts the cursor at the list's current front, adopting the
    /// list's current structural state. Equivalent to replacing the
    /// cursor with `list.cursor()`; in particular, this revives a cursor
    /// that was invalidated by a direct mutation of the list.
    pub fn reset(&mut self, list: &LinkedList<T>) {
        *self = Cursor::new(list);
    }
}
