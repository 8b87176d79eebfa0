//! A fixed capacity ring buffer with saturating writes.

use std::fmt;
use std::ops::Index;

use crate::error::CapacityError;
use crate::utils::{wrap_add, wrap_sub};

/// A fixed capacity ring buffer.
///
/// The "default" usage of this type as a queue is to use `push_back` to add to
/// the ring, and `pop_front` to remove from it. Iterating over a `Ring` goes
/// front to back.
///
/// # Capacity
///
/// All `N` slots are usable: the number of occupied slots is tracked on its
/// own, so a full ring holds exactly `N` elements.
///
/// Pushing onto a full ring **exits early, without performing any mutation**,
/// and hands the element back inside a [`CapacityError`].
pub struct Ring<T, const N: usize> {
    xs: [Option<T>; N],
    // slot the next push writes to
    head: usize,
    // slot of the front element
    tail: usize,
    len: usize,
}

impl<T: Clone, const N: usize> Clone for Ring<T, N> {
    fn clone(&self) -> Self {
        Ring {
            xs: self.xs.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<T, const N: usize> Default for Ring<T, N> {
    #[inline]
    fn default() -> Self {
        Ring::new()
    }
}

impl<T, const N: usize> Ring<T, N> {
    /// Creates an empty `Ring`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextpieces::Ring;
    ///
    /// let ring: Ring<usize, 3> = Ring::new();
    /// assert!(ring.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Ring {
            xs: std::array::from_fn(|_| None),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Return the capacity of the `Ring`.
    #[inline]
    pub fn capacity(&self) -> usize {
        N
    }

    /// Returns the number of elements in the `Ring`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the ring contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if the ring is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextpieces::Ring;
    ///
    /// let mut ring: Ring<_, 2> = Ring::new();
    /// assert!(!ring.is_full());
    ///
    /// ring.push_back(1).unwrap();
    /// ring.push_back(2).unwrap();
    ///
    /// assert!(ring.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Slot index of the front element.
    #[inline]
    pub fn front_index(&self) -> usize {
        self.tail
    }

    /// Slot index the next `push_back` writes to.
    #[inline]
    pub fn back_index(&self) -> usize {
        self.head
    }

    /// Appends an element to the back of the ring.
    ///
    /// Returns `Err(CapacityError { element })` with the ring left untouched
    /// if it is already full.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextpieces::Ring;
    ///
    /// let mut ring: Ring<_, 2> = Ring::new();
    /// ring.push_back(1).unwrap();
    /// ring.push_back(2).unwrap();
    /// let overflow = ring.push_back(3);
    ///
    /// assert_eq!(ring.back(), Some(&2));
    /// assert_eq!(overflow.unwrap_err().element, 3);
    /// ```
    pub fn push_back(&mut self, element: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError { element });
        }
        let head = self.head;
        self.xs[head] = Some(element);
        self.head = wrap_add(head, 1, N);
        self.len += 1;
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the ring is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextpieces::Ring;
    ///
    /// let mut ring: Ring<_, 3> = Ring::new();
    /// ring.push_back(1).unwrap();
    /// ring.push_back(2).unwrap();
    ///
    /// assert_eq!(ring.pop_front(), Some(1));
    /// assert_eq!(ring.pop_front(), Some(2));
    /// assert_eq!(ring.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let tail = self.tail;
        let element = self.xs[tail].take();
        debug_assert!(element.is_some(), "empty slot {} inside the ring", tail);
        self.tail = wrap_add(tail, 1, N);
        self.len -= 1;
        element
    }

    /// Retrieves an element by index. Element at index 0 is the front.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.xs[wrap_add(self.tail, index, N)].as_ref()
        } else {
            None
        }
    }

    /// Provides a reference to the front element, or `None` if the ring is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Provides a reference to the back element, or `None` if the ring is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.xs[wrap_sub(self.head, 1, N)].as_ref()
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use nextpieces::Ring;
    ///
    /// let mut ring: Ring<_, 4> = Ring::new();
    /// ring.push_back(5).unwrap();
    /// ring.push_back(3).unwrap();
    /// ring.push_back(4).unwrap();
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = ring.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter {
            ring: &self.xs,
            tail: self.tail,
            len: self.len,
        }
    }

    /// Drops every element and rewinds both indices to slot 0.
    pub fn clear(&mut self) {
        for slot in self.xs.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }
}

impl<T: PartialEq, const N: usize> PartialEq for Ring<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for Ring<T, N> {}

#[cfg(test)]
impl<T: PartialEq, const N: usize> PartialEq<Vec<T>> for Ring<T, N> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, const N: usize> Index<usize> for Ring<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Ring<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Ring<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

/// `Ring` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [Option<T>],
    tail: usize,
    len: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            tail: self.tail,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        let tail = self.tail;
        self.tail = wrap_add(tail, 1, self.ring.len());
        self.len -= 1;
        self.ring[tail].as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.ring[wrap_add(self.tail, self.len, self.ring.len())].as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Rotates an empty ring so that its front starts at `padding`.
    fn rotated<const N: usize>(padding: usize) -> Ring<usize, N> {
        let mut ring = Ring::new();
        for i in 0..padding {
            ring.push_back(i).unwrap();
            ring.pop_front();
        }
        ring
    }

    #[test]
    fn simple() {
        let mut tester: Ring<_, 5> = Ring::new();
        assert_eq!(tester.capacity(), 5);
        assert_eq!(tester.len(), 0);

        tester.push_back(1).unwrap();
        tester.push_back(2).unwrap();
        tester.push_back(3).unwrap();
        tester.push_back(4).unwrap();
        assert_eq!(tester.len(), 4);

        assert_eq!(tester.pop_front(), Some(1));
        assert_eq!(tester.pop_front(), Some(2));
        assert_eq!(tester.len(), 2);
        assert_eq!(tester.pop_front(), Some(3));
        assert_eq!(tester.pop_front(), Some(4));
        assert_eq!(tester.pop_front(), None);
    }

    #[test]
    fn every_slot_is_usable() {
        const CAP: usize = 5;
        for padding in 0..CAP {
            let mut tester = rotated::<CAP>(padding);
            for x in 0..CAP {
                assert!(tester.push_back(x).is_ok());
            }
            assert!(tester.is_full());
            assert_eq!(tester.len(), CAP);
            assert_eq!(tester, (0..CAP).collect::<Vec<_>>());
        }
    }

    #[test]
    fn saturating_push_leaves_ring_unchanged() {
        const CAP: usize = 4;
        for padding in 0..CAP {
            let mut tester = rotated::<CAP>(padding);
            for x in 0..CAP {
                tester.push_back(x).unwrap();
            }
            let head = tester.back_index();
            let tail = tester.front_index();

            let err = tester.push_back(99).unwrap_err();
            assert_eq!(err.element, 99);
            assert_eq!(tester.len(), CAP);
            assert_eq!(tester.back_index(), head);
            assert_eq!(tester.front_index(), tail);
            assert_eq!(tester, vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn indices_wrap_modulo_capacity() {
        let mut tester: Ring<_, 3> = Ring::new();
        tester.push_back('a').unwrap();
        tester.push_back('b').unwrap();
        tester.push_back('c').unwrap();
        assert_eq!(tester.back_index(), 0);
        assert_eq!(tester.front_index(), 0);

        assert_eq!(tester.pop_front(), Some('a'));
        assert_eq!(tester.front_index(), 1);
        tester.push_back('d').unwrap();
        assert_eq!(tester.back_index(), 1);
        assert_eq!(tester, vec!['b', 'c', 'd']);
    }

    #[test]
    fn front_back_get() {
        const CAP: usize = 6;
        for padding in 0..CAP {
            let mut tester = rotated::<CAP>(padding);
            assert_eq!(tester.front(), None);
            assert_eq!(tester.back(), None);
            assert_eq!(tester.get(0), None);

            for x in 10..14 {
                tester.push_back(x).unwrap();
            }
            assert_eq!(tester.front(), Some(&10));
            assert_eq!(tester.back(), Some(&13));
            assert_eq!(tester.get(2), Some(&12));
            assert_eq!(tester.get(4), None);
            assert_eq!(tester[1], 11);
        }
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_bounds() {
        let mut tester: Ring<_, 3> = Ring::new();
        tester.push_back(1).unwrap();
        let _oob = tester[1];
    }

    #[test]
    fn iter_both_ends() {
        const CAP: usize = 5;
        for padding in 0..CAP {
            let mut tester = rotated::<CAP>(padding);
            tester.push_back(0).unwrap();
            tester.push_back(1).unwrap();
            tester.push_back(2).unwrap();

            let forward: Vec<_> = tester.iter().cloned().collect();
            assert_eq!(forward, vec![0, 1, 2]);
            let backward: Vec<_> = tester.iter().rev().cloned().collect();
            assert_eq!(backward, vec![2, 1, 0]);

            let mut iter = tester.iter();
            assert_eq!(iter.len(), 3);
            assert_eq!(iter.next(), Some(&0));
            assert_eq!(iter.next_back(), Some(&2));
            assert_eq!(iter.len(), 1);
            assert_eq!(iter.next(), Some(&1));
            assert_eq!(iter.next_back(), None);
        }
    }

    #[test]
    fn iter_is_restartable() {
        let mut tester: Ring<_, 4> = Ring::new();
        tester.push_back(7).unwrap();
        tester.push_back(8).unwrap();

        let iter = tester.iter();
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(tester.iter().collect::<Vec<_>>(), first);
        assert_eq!(tester.len(), 2);
    }

    #[test]
    fn partial_equal_ignores_rotation() {
        const CAP: usize = 7;
        for len in 0..CAP {
            for padding in 0..CAP {
                let mut tester = rotated::<CAP>(padding);
                let mut expected: Ring<usize, CAP> = Ring::new();
                for x in 0..len {
                    tester.push_back(x).unwrap();
                    expected.push_back(x).unwrap();
                }
                assert_eq!(tester, expected);

                if len > 2 {
                    tester.pop_front();
                    assert!(tester != expected);
                }
            }
        }
    }

    #[test]
    fn fmt() {
        let mut tester: Ring<_, 5> = Ring::new();
        for x in 0..4 {
            tester.push_back(x).unwrap();
        }
        assert_eq!(format!("{:?}", tester), "[0, 1, 2, 3]");
    }

    #[test]
    fn clear() {
        let mut tester = rotated::<4>(3);
        tester.push_back(1).unwrap();
        tester.push_back(2).unwrap();
        tester.clear();
        assert!(tester.is_empty());
        assert_eq!(tester.front_index(), 0);
        assert_eq!(tester.back_index(), 0);
        assert_eq!(tester.pop_front(), None);
    }

    #[test]
    fn zero_capacity() {
        let mut tester: Ring<u8, 0> = Ring::new();
        assert!(tester.is_empty());
        assert!(tester.is_full());
        assert_eq!(tester.push_back(1).unwrap_err().element, 1);
        assert_eq!(tester.pop_front(), None);
        assert_eq!(tester.back(), None);
        assert_eq!(tester.iter().count(), 0);
    }

    #[test]
    fn matches_vecdeque_under_mixed_operations() {
        const CAP: usize = 5;
        let mut tester: Ring<usize, CAP> = Ring::new();
        let mut model = VecDeque::new();
        // a fixed, irregular op pattern: true pushes, false pops
        let pattern = [true, true, false, true, true, true, true, true, false, false, true,
                       false, false, false, false, false, true, true, false, true];
        for (step, push) in pattern.iter().cycle().take(200).enumerate() {
            if *push {
                let pushed = tester.push_back(step);
                if model.len() < CAP {
                    assert!(pushed.is_ok());
                    model.push_back(step);
                } else {
                    assert_eq!(pushed.unwrap_err().element, step);
                }
            } else {
                assert_eq!(tester.pop_front(), model.pop_front());
            }
            assert!(tester.len() <= CAP);
            assert_eq!(tester.len(), model.len());
            assert!(tester.iter().eq(model.iter()));
        }
    }
}
