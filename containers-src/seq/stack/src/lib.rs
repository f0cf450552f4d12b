use std::fmt::{self, Debug};

use container_error::ContainerError;
use linked_list::List;

/// Last in, first out. The top is the front of the underlying [`List`].
///
/// ```
/// use stack::Stack;
///
/// let mut st = Stack::new();
/// st.push(1);
/// st.push(2);
/// assert_eq!(st.top(), Ok(&2));
/// assert_eq!(st.pop(), Some(2));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stack<T>(List<T>);

impl<T> Stack<T> {
    pub fn new() -> Self { Self(List::new()) }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn top(&self) -> Result<&T, ContainerError> {
        self.0.front().map_err(|_| ContainerError::Empty("top"))
    }
    pub fn top_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.0.front_mut().map_err(|_| ContainerError::Empty("top"))
    }

    pub fn push(&mut self, x: T) { self.0.push_front(x) }
    pub fn pop(&mut self) -> Option<T> { self.0.pop_front() }

    /// Pushes the items in order; the last one ends up on top.
    pub fn emplace_front<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.push(x);
        }
    }

    pub fn swap(&mut self, other: &mut Self) { self.0.swap(&mut other.0) }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().rev()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.emplace_front(iter)
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut res = Self::new();
        res.extend(iter);
        res
    }
}

#[test]
fn sanity_check() {
    let mut st: Stack<_> = (1..=3).collect();
    assert_eq!(st.len(), 3);
    assert_eq!(format!("{st:?}"), "[1, 2, 3]");
    *st.top_mut().unwrap() = 30;
    assert_eq!(st.pop(), Some(30));
    st.emplace_front([4, 5]);
    assert_eq!(st.top(), Ok(&5));

    let mut other = Stack::new();
    other.swap(&mut st);
    assert!(st.is_empty());
    assert_eq!(st.top(), Err(ContainerError::Empty("top")));
    assert_eq!(st.pop(), None);
    let copy = other.clone();
    assert_eq!(copy, other);
    assert!(std::iter::from_fn(|| other.pop()).eq([5, 4, 2, 1]));
}
