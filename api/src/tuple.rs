//! Facts of arbitrary arity.
//!
//! A fact is usually a triple (`[T; 3]`) or a quad (`[T; 4]`, graph name first),
//! but some stores keep extra leading fields.
//! [`Tuple`] is a fact whose arity is only known at run time;
//! its last three items are always the subject, predicate and object.
use std::ops::Deref;

/// The error raised when building a [`Tuple`] with a wrong arity.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TupleError {
    /// Too few items were provided
    #[error("a tuple needs at least 3 items, got {0}")]
    Arity(usize),
}

/// A fact with at least three items.
///
/// Leading items (if any) are opaque,
/// the last three are the subject, the predicate and the object.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Tuple<T>(Box<[T]>);

impl<T> Tuple<T> {
    /// Build a tuple from the given items.
    ///
    /// Fails if fewer than 3 items are provided.
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Result<Self, TupleError> {
        let items: Box<[T]> = items.into_iter().collect();
        if items.len() < 3 {
            return Err(TupleError::Arity(items.len()));
        }
        Ok(Tuple(items))
    }

    /// The number of items in this tuple (at least 3).
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    /// The leading items of this tuple (may be empty).
    pub fn prefix(&self) -> &[T] {
        &self.0[..self.0.len() - 3]
    }

    /// The subject of this tuple.
    pub fn s(&self) -> &T {
        &self.0[self.0.len() - 3]
    }

    /// The predicate of this tuple.
    pub fn p(&self) -> &T {
        &self.0[self.0.len() - 2]
    }

    /// The object of this tuple.
    pub fn o(&self) -> &T {
        &self.0[self.0.len() - 1]
    }
}

impl<T> Deref for Tuple<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> From<[T; 3]> for Tuple<T> {
    fn from(spo: [T; 3]) -> Self {
        Tuple(Box::new(spo))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(vec![]; "empty")]
    #[test_case(vec![1]; "one item")]
    #[test_case(vec![1, 2]; "two items")]
    fn wrong_arity(items: Vec<u32>) {
        let n = items.len();
        assert_eq!(Tuple::new(items), Err(TupleError::Arity(n)));
    }

    #[test]
    fn spo_are_the_last_three() {
        let t = Tuple::new([9, 8, 1, 2, 3]).unwrap();
        assert_eq!(t.arity(), 5);
        assert_eq!(t.prefix(), &[9, 8]);
        assert_eq!((t.s(), t.p(), t.o()), (&1, &2, &3));

        let t = Tuple::from([1, 2, 3]);
        assert!(t.prefix().is_empty());
        assert_eq!(&t[..], &[1, 2, 3]);
    }
}
