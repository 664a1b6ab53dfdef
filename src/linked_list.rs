//! A singly-linked list with owned nodes.
//!
//! The `LinkedList` keeps a pointer to both ends of the chain, so appending and
//! prepending run in constant time. Everything that addresses an element by
//! index walks the chain from the head.
//!
//! NOTE: It is almost always better to use `Vec` or `VecDeque` because
//! array-based containers are generally faster,
//! more memory efficient, and make better use of CPU cache.

use core::fmt;
use core::iter::{self, FromIterator};
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use log::{debug, trace};

use crate::error::ListError;
use crate::iter::{IntoIter, Iter};

/// A singly-linked list with owned nodes.
///
/// Every node is owned by exactly one slot: the `head` of the list for the
/// first node, the `next` link of its predecessor for every other node. `tail`
/// is an alias into the chain and owns nothing.
pub struct LinkedList<T> {
    pub(crate) head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

/// A single element of a `LinkedList`.
///
/// Nodes are only ever handed out by shared reference; they are created and
/// released by the list alone.
pub struct Node<T> {
    pub(crate) next: Option<NonNull<Node<T>>>,
    pub(crate) value: T,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node { next: None, value }
    }

    fn into_value(self: Box<Self>) -> T {
        self.value
    }

    /// The value stored in this node.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node following this one, or `None` if this is the tail.
    #[inline]
    pub fn next(&self) -> Option<&Node<T>> {
        // The successor lives as long as the list, which outlives `&self`.
        self.next.map(|next| unsafe { &*next.as_ptr() })
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("has_next", &self.next.is_some())
            .finish()
    }
}

// private methods
impl<T> LinkedList<T> {
    /// Adds the given node to the front of the list.
    #[inline]
    fn push_front_node(&mut self, mut node: Box<Node<T>>) {
        node.next = self.head;
        let node = Some(NonNull::from(Box::leak(node)));

        if self.tail.is_none() {
            self.tail = node;
        }

        self.head = node;
        self.len += 1;
    }

    /// Adds the given node to the back of the list.
    #[inline]
    fn push_back_node(&mut self, mut node: Box<Node<T>>) {
        node.next = None;
        let node = Some(NonNull::from(Box::leak(node)));

        match self.tail {
            None => self.head = node,
            Some(tail) => unsafe { (*tail.as_ptr()).next = node },
        }

        self.tail = node;
        self.len += 1;
    }

    /// Removes and returns the node at the front of the list.
    #[inline]
    pub(crate) fn pop_front_node(&mut self) -> Option<Box<Node<T>>> {
        let head = self.head?;
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;

        if self.head.is_none() {
            self.tail = None;
        }

        self.len -= 1;
        Some(node)
    }

    /// Removes and returns the node at the back of the list.
    ///
    /// Without back links the new tail has to be found by walking from the
    /// head, so this is *O*(*n*).
    fn pop_back_node(&mut self) -> Option<Box<Node<T>>> {
        let tail = self.tail?;

        if self.len == 1 {
            self.head = None;
            self.tail = None;
        } else {
            let new_tail = self.node_at(self.len - 2)?;
            unsafe { (*new_tail.as_ptr()).next = None };
            self.tail = Some(new_tail);
        }

        self.len -= 1;
        Some(unsafe { Box::from_raw(tail.as_ptr()) })
    }

    /// Walks `index` links from the head.
    ///
    /// Returns `None` for any index outside `0..len`.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }

        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|node| unsafe { node.as_ref().next });
        }
        current
    }

    /// Splices `node` in directly behind `previous`.
    ///
    /// Warning: this will not check that `previous` belongs to the current list.
    unsafe fn link_after(&mut self, previous: NonNull<Node<T>>, mut node: Box<Node<T>>) {
        node.next = (*previous.as_ptr()).next;
        let node = NonNull::from(Box::leak(node));

        (*previous.as_ptr()).next = Some(node);
        if self.tail == Some(previous) {
            self.tail = Some(node);
        }

        self.len += 1;
    }

    /// Excises the successor of `previous` and hands back its ownership.
    ///
    /// Warning: this will not check that `previous` belongs to the current list.
    unsafe fn unlink_after(&mut self, previous: NonNull<Node<T>>) -> Option<Box<Node<T>>> {
        let current = (*previous.as_ptr()).next?;
        let current = Box::from_raw(current.as_ptr());

        (*previous.as_ptr()).next = current.next;
        if current.next.is_none() {
            self.tail = Some(previous);
        }

        self.len -= 1;
        Some(current)
    }

    fn invalid_index(&self, op: &str, index: usize) -> ListError {
        debug!("Rejected {} at index {} (size {})", op, index, self.len);
        ListError::InvalidIndex {
            index,
            size: self.len,
        }
    }

    fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        iter::successors(self.head(), |&node| node.next())
    }
}

impl<T> Default for LinkedList<T> {
    /// Creates an empty `LinkedList<T>`.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty `LinkedList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_list::LinkedList;
    ///
    /// let list: LinkedList<u32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Appends a value to the end of the list.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.tail().map(|node| *node.value()), Some(3));
    /// ```
    pub fn append(&mut self, value: T) {
        self.push_back_node(Box::new(Node::new(value)));
    }

    /// Adds a value to the front of the list.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.prepend(2);
    /// list.prepend(1);
    /// assert_eq!(list.head().map(|node| *node.value()), Some(1));
    /// ```
    pub fn prepend(&mut self, value: T) {
        self.push_front_node(Box::new(Node::new(value)));
    }

    /// Inserts a value so that it ends up at position `index`.
    ///
    /// Any `index` in `0..=len` is accepted; `len` appends. Anything larger is
    /// rejected with [`ListError::InvalidIndex`] and leaves the list untouched.
    ///
    /// This operation should compute in *O*(`index`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<char> = "ac".chars().collect();
    /// list.insert_at('b', 1).unwrap();
    /// assert_eq!(list.to_string(), "(a) -> (b) -> (c) -> null");
    /// assert!(list.insert_at('z', 9).is_err());
    /// ```
    pub fn insert_at(&mut self, value: T, index: usize) -> Result<(), ListError> {
        if index > self.len {
            return Err(self.invalid_index("insert", index));
        }

        if index == 0 {
            self.prepend(value);
            return Ok(());
        }

        let previous = self
            .node_at(index - 1)
            .ok_or_else(|| self.invalid_index("insert", index))?;
        unsafe { self.link_after(previous, Box::new(Node::new(value))) };
        Ok(())
    }

    /// Removes the element at position `index` and returns it.
    ///
    /// Any `index` in `0..len` is accepted. Anything else, including every
    /// index on an empty list, is rejected with [`ListError::InvalidIndex`]
    /// and leaves the list untouched.
    ///
    /// This operation should compute in *O*(`index`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_list::LinkedList;
    ///
    /// let mut list: LinkedList<u32> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(list.remove_at(1), Ok(2));
    /// assert_eq!(list.to_string(), "(1) -> (3) -> null");
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if index >= self.len {
            return Err(self.invalid_index("remove", index));
        }

        let node = if index == 0 {
            self.pop_front_node()
        } else {
            match self.node_at(index - 1) {
                Some(previous) => unsafe { self.unlink_after(previous) },
                None => None,
            }
        };

        match node {
            Some(node) => Ok(node.into_value()),
            None => Err(self.invalid_index("remove", index)),
        }
    }

    /// Provides a reference to the node at position `index`, or `None` if
    /// the list is not that long.
    ///
    /// This operation should compute in *O*(`index`) time.
    pub fn at(&self, index: usize) -> Option<&Node<T>> {
        self.node_at(index).map(|node| unsafe { &*node.as_ptr() })
    }

    /// Provides a reference to the value at position `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).map(Node::value)
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// assert_eq!(list.pop(), None);
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.pop(), Some(3));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            trace!("Pop on an empty list");
        }
        self.pop_back_node().map(Node::into_value)
    }

    /// Returns `true` if the list contains an element equal to the given value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.find(value).is_some()
    }

    /// Returns the first node whose value equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_list::LinkedList;
    ///
    /// let list: LinkedList<&str> = vec!["Cat", "Dog"].into_iter().collect();
    /// let dog = list.find(&"Dog").unwrap();
    /// assert_eq!(dog.value(), &"Dog");
    /// assert!(dog.next().is_none());
    /// assert!(list.find(&"Emu").is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: PartialEq<T>,
    {
        self.nodes().find(|node| node.value == *value)
    }

    /// The first node, or `None` if the list is empty.
    #[inline]
    pub fn head(&self) -> Option<&Node<T>> {
        self.head.map(|node| unsafe { &*node.as_ptr() })
    }

    /// The last node, or `None` if the list is empty.
    #[inline]
    pub fn tail(&self) -> Option<&Node<T>> {
        self.tail.map(|node| unsafe { &*node.as_ptr() })
    }

    /// Returns `true` if the `LinkedList` is empty.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes in the `LinkedList`.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `LinkedList`.
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Provides a forward iterator over the values.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            len: self.len,
            marker: PhantomData,
        }
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        struct DropGuard<'a, T>(&'a mut LinkedList<T>);

        impl<'a, T> Drop for DropGuard<'a, T> {
            fn drop(&mut self) {
                // Continue the same loop we do below. This only runs when a destructor has
                // panicked. If another one panics this will abort.
                while self.0.pop_front_node().is_some() {}
            }
        }

        while let Some(node) = self.pop_front_node() {
            let guard = DropGuard(self);
            drop(node);
            mem::forget(guard);
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    /// Renders `(v1) -> (v2) -> ... -> null`; an empty list is just `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            write!(f, "({}) -> ", value)?;
        }
        f.write_str("null")
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |value| self.append(value));
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the list into an iterator yielding elements by value.
    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// Ensure that `LinkedList` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: LinkedList<&'static str>) -> LinkedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}

unsafe impl<T: Sync> Sync for LinkedList<T> {}
