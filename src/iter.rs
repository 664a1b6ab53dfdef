use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::linked_list::{LinkedList, Node};

/// An iterator over the values of a `LinkedList`.
///
/// This `struct` is created by [`LinkedList::iter()`]. See its
/// documentation for more.
pub struct Iter<'a, T: 'a> {
    pub(crate) head: Option<NonNull<Node<T>>>,
    pub(crate) len: usize,
    pub(crate) marker: PhantomData<&'a Node<T>>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.len).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }

        self.head.map(|node| unsafe {
            // Need an unbound lifetime to get 'a
            let node = &*node.as_ptr();
            self.len -= 1;
            self.head = node.next;
            &node.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the values of a `LinkedList`.
///
/// This `struct` is created by the [`into_iter`] method on [`LinkedList`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: LinkedList::into_iter
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front_node().map(|node| node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use crate::LinkedList;

    #[test]
    fn iter_is_exact_size() {
        let list: LinkedList<u32> = (0..4).collect();
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        iter.next();
        assert_eq!(iter.size_hint(), (3, Some(3)));
        assert_eq!(iter.cloned().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn iter_on_empty_list() {
        let list: LinkedList<u32> = LinkedList::new();
        let mut iter = list.iter();
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_yields_front_to_back() {
        let mut list = LinkedList::new();
        list.prepend("b");
        list.prepend("a");
        list.append("c");
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn partially_consumed_into_iter_drops_the_rest() {
        let list: LinkedList<String> = (0..5).map(|i| i.to_string()).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.next().as_deref(), Some("0"));
        assert_eq!(iter.len(), 4);
    }

    #[test]
    fn borrowed_loop() {
        let list: LinkedList<u32> = (1..=3).collect();
        let mut sum = 0;
        for value in &list {
            sum += value;
        }
        assert_eq!(sum, 6);
    }
}
