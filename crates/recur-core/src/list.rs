//! Recursive singly-linked list with structural-recursion operations.
//!
//! `List<T>` is a closed sum type with exactly two variants: the empty list
//! and a cons cell holding a head element and the rest of the sequence.
//! Lists are finite and acyclic by construction (every cons cell is built
//! from an already-existing, strictly shorter list) and immutable once
//! built: every operation returns a new list instead of mutating.
//!
//! The tail is held behind an `Rc` so that [`List::append`] can share the
//! second list's nodes instead of copying them; everywhere else the
//! reference count stays at one and the list behaves like a uniquely owned
//! structure.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

//-----------------------------------------------------------------------------
// List Definition
//-----------------------------------------------------------------------------

/// A finite, immutable singly-linked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum List<T> {
    /// The end of a sequence; carries no data.
    Empty,
    /// An element followed by the rest of the sequence.
    Cons(T, Rc<List<T>>),
}

impl<T> List<T> {
    /// Create an empty list.
    pub fn empty() -> Self {
        List::Empty
    }

    /// Prepend `head` onto `tail`. This is the only way a list grows.
    pub fn cons(head: T, tail: List<T>) -> Self {
        List::Cons(head, Rc::new(tail))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, List::Empty)
    }

    /// Number of elements, by walking the spine.
    pub fn len(&self) -> usize {
        match self {
            List::Empty => 0,
            List::Cons(_, tail) => 1 + tail.len(),
        }
    }

    /// Borrowed front-to-back iteration.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: Some(self) }
    }

    /// Right fold: the base value is combined in at the innermost (last)
    /// position first, then outward. `f` sees elements head-to-tail, but
    /// each call needs the full recursive result of the tail, so this is
    /// not tail-recursive and uses stack depth equal to the list length.
    pub fn fold_right<B, F>(&self, f: F, base: B) -> B
    where
        F: Fn(&T, B) -> B,
    {
        fn go<T, B, F>(list: &List<T>, f: &F, base: B) -> B
        where
            F: Fn(&T, B) -> B,
        {
            match list {
                List::Empty => base,
                List::Cons(head, tail) => f(head, go(tail, f, base)),
            }
        }
        go(self, &f, base)
    }

    /// Apply `f` to every element, preserving length and order.
    pub fn map<U, F>(&self, f: F) -> List<U>
    where
        F: Fn(&T) -> U,
    {
        fn go<T, U, F>(list: &List<T>, f: &F) -> List<U>
        where
            F: Fn(&T) -> U,
        {
            match list {
                List::Empty => List::Empty,
                List::Cons(head, tail) => List::cons(f(head), go(tail, f)),
            }
        }
        go(self, &f)
    }
}

impl<T: Clone> List<T> {
    /// Build a list from a slice, preserving order: the first slice element
    /// becomes the outermost cons cell. Construction prepends from the back.
    pub fn from_slice(items: &[T]) -> Self {
        items
            .iter()
            .rev()
            .fold(List::Empty, |acc, item| List::cons(item.clone(), acc))
    }

    /// The first `n` elements. Returns the whole list unchanged when `n`
    /// exceeds the length; recursion stops at `Empty`, so `n` never goes
    /// negative.
    pub fn take(&self, n: usize) -> Self {
        match self {
            List::Empty => List::Empty,
            List::Cons(_, _) if n == 0 => List::Empty,
            List::Cons(head, tail) => List::cons(head.clone(), tail.take(n - 1)),
        }
    }

    /// Concatenate: re-cons the elements of `self` onto `other`. O(len of
    /// self); `other`'s spine is shared via `Rc`, not copied.
    pub fn append(&self, other: &Self) -> Self {
        match self {
            List::Empty => other.clone(),
            List::Cons(head, tail) => List::cons(head.clone(), tail.append(other)),
        }
    }

    /// The power set as a list of lists, `2^len` entries. At each level the
    /// subsets containing the head precede the subsets without it, so the
    /// order is deterministic.
    pub fn sublists(&self) -> List<List<T>> {
        match self {
            List::Empty => List::cons(List::Empty, List::Empty),
            List::Cons(head, tail) => {
                let tail_subs = tail.sublists();
                let with_head = tail_subs.map(|sub| List::cons(head.clone(), sub.clone()));
                with_head.append(&tail_subs)
            }
        }
    }
}

//-----------------------------------------------------------------------------
// Integer Reductions
//-----------------------------------------------------------------------------

impl List<i32> {
    /// Sum of the elements: 0 for `Empty`, otherwise the head plus the full
    /// recursive sum of the tail. Arithmetic wraps on 32-bit two's-complement
    /// overflow; that choice is deliberate and matches [`Expr::evaluate`].
    ///
    /// [`Expr::evaluate`]: crate::expr::Expr::evaluate
    pub fn sum(&self) -> i32 {
        match self {
            List::Empty => 0,
            List::Cons(head, tail) => tail.sum().wrapping_add(*head),
        }
    }

    /// Product of the elements: 1 for `Empty`. Same wrapping semantics as
    /// [`List::sum`].
    pub fn product(&self) -> i32 {
        match self {
            List::Empty => 1,
            List::Cons(head, tail) => tail.product().wrapping_mul(*head),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::Empty
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(List::Empty, |acc, item| List::cons(item, acc))
    }
}

/// Iterator over borrowed elements, front to back.
pub struct Iter<'a, T> {
    next: Option<&'a List<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next.take()? {
            List::Empty => None,
            List::Cons(head, tail) => {
                self.next = Some(tail);
                Some(head)
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders as `[5, 3, 2]`. Cosmetic only: deterministic and
/// order-preserving, but not a stable interchange format.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

//-----------------------------------------------------------------------------
// Tests
//-----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(items: &[i32]) -> List<i32> {
        List::from_slice(items)
    }

    #[test]
    fn construction_preserves_order() {
        let list = ints(&[5, 3, 2]);
        assert_eq!(
            list,
            List::cons(5, List::cons(3, List::cons(2, List::Empty)))
        );
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
        assert!(List::<i32>::empty().is_empty());
    }

    #[test]
    fn from_iterator_matches_from_slice() {
        let collected: List<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(collected, ints(&[1, 2, 3]));
        let empty: List<i32> = std::iter::empty().collect();
        assert_eq!(empty, List::Empty);
    }

    #[test]
    fn sum_and_product() {
        let list = ints(&[5, 3, 2]);
        assert_eq!(list.sum(), 10);
        assert_eq!(list.product(), 30);
        assert_eq!(List::<i32>::empty().sum(), 0);
        assert_eq!(List::<i32>::empty().product(), 1);
    }

    #[test]
    fn reductions_agree_with_fold_right() {
        let list = ints(&[5, 3, 2]);
        assert_eq!(list.sum(), list.fold_right(|h, acc: i32| h + acc, 0));
        assert_eq!(list.product(), list.fold_right(|h, acc: i32| h * acc, 1));
    }

    #[test]
    fn fold_right_concatenates_strings_head_to_tail() {
        let list = List::from_slice(&["a".to_string(), "b".to_string(), "c".to_string()]);
        let concat = list.fold_right(|h, acc: String| format!("{}{}", h, acc), String::new());
        assert_eq!(concat, "abc");
    }

    #[test]
    fn map_preserves_length_and_order() {
        let list = ints(&[1, 2, 3]);
        let doubled = list.map(|x| x * 2);
        assert_eq!(doubled, ints(&[2, 4, 6]));
        assert_eq!(doubled.len(), list.len());
    }

    #[test]
    fn take_stops_at_n_or_end() {
        let list = ints(&[1, 2, 3, 4, 5]);
        assert_eq!(list.take(3), ints(&[1, 2, 3]));
        assert_eq!(list.take(0), List::Empty);
        // n past the end returns the list unchanged, no error
        assert_eq!(list.take(99), list);
    }

    #[test]
    fn append_identities() {
        let list = ints(&[1, 2, 3]);
        assert_eq!(list.append(&List::Empty), list);
        assert_eq!(List::Empty.append(&list), list);
        assert_eq!(ints(&[1, 2]).append(&ints(&[3, 4])), ints(&[1, 2, 3, 4]));
    }

    #[test]
    fn sublists_of_two_elements() {
        let subs = ints(&[1, 2]).sublists();
        assert_eq!(subs.len(), 4);
        let expected: Vec<List<i32>> = vec![
            ints(&[1, 2]),
            ints(&[1]),
            ints(&[2]),
            List::Empty,
        ];
        let actual: Vec<List<i32>> = subs.iter().cloned().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn sublists_of_empty_is_singleton_empty() {
        let subs = List::<i32>::empty().sublists();
        assert_eq!(subs, List::cons(List::Empty, List::Empty));
    }

    #[test]
    fn sum_wraps_on_overflow() {
        let list = ints(&[i32::MAX, 1]);
        assert_eq!(list.sum(), i32::MIN);
    }

    #[test]
    fn display_rendering() {
        assert_eq!(ints(&[5, 3, 2]).to_string(), "[5, 3, 2]");
        assert_eq!(List::<i32>::empty().to_string(), "[]");
    }

    #[test]
    fn serde_round_trip() {
        let list = ints(&[1, 2, 3]);
        let json = serde_json::to_string(&list).unwrap();
        let back: List<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }
}
