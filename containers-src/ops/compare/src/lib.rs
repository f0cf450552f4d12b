use std::cmp::Ordering::{self, Equal, Greater, Less};

/// A total order over `T`, held by value inside the ordered containers.
///
/// Two elements are *equivalent* when `compare` returns `Equal`; the ordered
/// containers treat equivalent elements as duplicates.
pub trait Compare<T: ?Sized> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;

    fn less(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Less
    }
    fn equiv(&self, lhs: &T, rhs: &T) -> bool {
        self.compare(lhs, rhs) == Equal
    }
}

/// The order given by [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Natural;

/// Builds an order from a strict-less predicate `lt(lhs, rhs)`.
///
/// The predicate must be a strict weak ordering; `Equal` is reported when
/// neither side is less than the other.
#[derive(Clone, Copy, Default)]
pub struct StrictLess<F>(pub F);

/// Builds an order from a three-way comparison closure.
#[derive(Clone, Copy, Default)]
pub struct FnCompare<F>(pub F);

impl<T: Ord + ?Sized> Compare<T> for Natural {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { lhs.cmp(rhs) }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Compare<T> for StrictLess<F> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        if (self.0)(lhs, rhs) {
            Less
        } else if (self.0)(rhs, lhs) {
            Greater
        } else {
            Equal
        }
    }
    fn less(&self, lhs: &T, rhs: &T) -> bool { (self.0)(lhs, rhs) }
}

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Compare<T> for FnCompare<F> {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering { (self.0)(lhs, rhs) }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (**self).compare(lhs, rhs)
    }
}

impl<F> std::fmt::Debug for StrictLess<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StrictLess(..)")
    }
}

impl<F> std::fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnCompare(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural() {
        assert_eq!(Natural.compare(&1, &2), Less);
        assert_eq!(Natural.compare("b", "a"), Greater);
        assert!(Natural.equiv(&3, &3));
    }

    #[test]
    fn strict_less() {
        let by_len = StrictLess(|a: &&str, b: &&str| a.len() < b.len());
        assert_eq!(by_len.compare(&"ab", &"abc"), Less);
        assert_eq!(by_len.compare(&"abc", &"ab"), Greater);
        assert!(by_len.equiv(&"ab", &"cd"));
        assert!(by_len.less(&"", &"x"));
    }

    #[test]
    fn fn_compare() {
        let rev = FnCompare(|a: &i32, b: &i32| b.cmp(a));
        assert!(rev.less(&3, &1));
        assert_eq!((&rev).compare(&1, &1), Equal);
    }
}
