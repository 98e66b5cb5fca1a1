//! A [`TermIndex`] is a bidirectional association of terms with short numeric [indices](`Index`).
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use rdfs_api::term::EngineTerm;

/// Abstraction of the short numeric indices representing terms in a [`TermIndex`].
pub trait Index: Copy + std::fmt::Debug + Hash + Ord {
    /// The smallest index
    const ZERO: Self;
    /// The greatest index
    const MAX: Self;
    /// Convert a position into an index.
    ///
    /// # Panics
    /// If `other` does not fit in `Self`.
    fn from_usize(other: usize) -> Self;
    /// Convert an index back into a position.
    fn into_usize(self) -> usize;
}

impl Index for usize {
    const ZERO: Self = 0;
    const MAX: Self = usize::MAX;
    fn from_usize(other: usize) -> Self {
        other
    }
    fn into_usize(self) -> usize {
        self
    }
}

impl Index for u32 {
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;
    fn from_usize(other: usize) -> Self {
        other
            .try_into()
            .map_err(|_| ())
            .expect("usize too big to be converted to u32")
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

impl Index for u16 {
    const ZERO: Self = 0;
    const MAX: Self = u16::MAX;
    fn from_usize(other: usize) -> Self {
        other
            .try_into()
            .map_err(|_| ())
            .expect("usize too big to be converted to u16")
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

/// A bidirectional association of terms with short numeric [indices](`Index`).
///
/// Indices are allocated in increasing order, starting from [`Index::ZERO`].
/// [`Index::MAX`] is never allocated.
#[derive(Clone, Debug)]
pub struct TermIndex<T, I = u32> {
    t2i: HashMap<T, I>,
    i2t: Vec<T>,
}

impl<T, I> Default for TermIndex<T, I> {
    fn default() -> Self {
        TermIndex {
            t2i: HashMap::new(),
            i2t: vec![],
        }
    }
}

impl<T: EngineTerm, I: Index> TermIndex<T, I> {
    /// Build an empty term index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of terms in this index.
    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    /// Whether this index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the index corresponding to term `t`, if it exists.
    pub fn get_index(&self, t: &T) -> Option<I> {
        self.t2i.get(t).copied()
    }

    /// Get the index corresponding to term `t`, adding it in the term-index if necessary.
    pub fn ensure_index(&mut self, t: T) -> I {
        match self.t2i.entry(t) {
            Entry::Vacant(e) => {
                let i = I::from_usize(self.i2t.len());
                assert!(i != I::MAX, "term index is full");
                self.i2t.push(e.key().clone());
                e.insert(i);
                i
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    /// Get the term corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by [`get_index`](TermIndex::get_index)
    /// or [`ensure_index`](TermIndex::ensure_index),
    /// otherwise this method may panic.
    pub fn get_term(&self, i: I) -> &T {
        &self.i2t[i.into_usize()]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfs_api::term::SimpleTerm;

    #[test]
    fn simple_term_index() {
        let exa = SimpleTerm::iri("https://example.com/ns/a");
        let exb = SimpleTerm::iri("https://example.com/ns/b");
        let bn1 = SimpleTerm::bnode("bn1");

        let mut sti = TermIndex::<SimpleTerm, u32>::new();
        assert!(sti.is_empty());
        assert_eq!(sti.len(), 0);
        assert_eq!(sti.get_index(&exa), None);

        assert_eq!(sti.ensure_index(exa.clone()), 0);
        assert!(!sti.is_empty());
        assert_eq!(sti.len(), 1);
        assert_eq!(sti.get_index(&exa), Some(0));
        assert_eq!(sti.get_index(&exb), None);

        assert_eq!(sti.ensure_index(exb.clone()), 1);
        assert_eq!(sti.ensure_index(bn1.clone()), 2);
        assert_eq!(sti.len(), 3);

        assert_eq!(sti.ensure_index(exa.clone()), 0);
        assert_eq!(sti.ensure_index(exb.clone()), 1);
        assert_eq!(sti.ensure_index(bn1.clone()), 2);
        assert_eq!(sti.len(), 3);

        assert_eq!(sti.get_term(0), &exa);
        assert_eq!(sti.get_term(1), &exb);
        assert_eq!(sti.get_term(2), &bn1);
    }

    #[cfg(feature = "all_tests")]
    #[test]
    fn big_term_index() {
        const MAX: u32 = 20_000;
        let mut sti = TermIndex::<u32, u32>::new();
        for i in 0..MAX {
            assert_eq!(sti.ensure_index(i * 7), i);
        }
        assert_eq!(sti.len(), MAX as usize);
        for i in 0..MAX {
            assert_eq!(sti.ensure_index(i * 7), i);
            assert_eq!(sti.get_term(i), &(i * 7));
        }
    }
}
