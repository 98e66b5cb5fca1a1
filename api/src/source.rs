//! A [`Source`] gives access to stored facts,
//! through a single pattern-matching method.
//!
//! Sources are read-only, and return *only* what they store:
//! inference is the business of the engine built on top of them.
//!
//! Retrieval is fallible, and lazy:
//! errors may occur at any time during the iteration,
//! and are yielded as `Err` items.
use std::error::Error;

use resiter::Map;

use crate::term::EngineTerm;

/// Type alias for the results produced by a source.
pub type TupleResult<S> = Result<<S as Source>::Tuple, <S as Source>::Error>;
/// Type alias for the fallible iterators produced by a source.
pub type TupleSource<'a, S> = Box<dyn Iterator<Item = TupleResult<S>> + 'a>;

/// Generic trait for stores of facts.
pub trait Source {
    /// The type of terms in this source.
    type Term: EngineTerm;
    /// The type of facts yielded by this source.
    type Tuple;
    /// The error that this source may raise.
    type Error: Error + 'static;

    /// An iterator visiting all stored facts matching the given pattern.
    ///
    /// `None` in any position matches any term.
    fn find(
        &self,
        s: Option<&Self::Term>,
        p: Option<&Self::Term>,
        o: Option<&Self::Term>,
    ) -> TupleSource<'_, Self>;

    /// Return `true` if this source contains the given fact.
    fn contains(
        &self,
        s: &Self::Term,
        p: &Self::Term,
        o: &Self::Term,
    ) -> Result<bool, Self::Error> {
        self.find(Some(s), Some(p), Some(o))
            .next()
            .transpose()
            .map(|t| t.is_some())
    }
}

impl<S: Source + ?Sized> Source for &S {
    type Term = S::Term;
    type Tuple = S::Tuple;
    type Error = S::Error;

    fn find(
        &self,
        s: Option<&Self::Term>,
        p: Option<&Self::Term>,
        o: Option<&Self::Term>,
    ) -> TupleSource<'_, Self> {
        S::find(self, s, p, o)
    }

    fn contains(
        &self,
        s: &Self::Term,
        p: &Self::Term,
        o: &Self::Term,
    ) -> Result<bool, Self::Error> {
        S::contains(self, s, p, o)
    }
}

/// A vector of triples is a (non-indexed) source.
impl<T: EngineTerm> Source for Vec<[T; 3]> {
    type Term = T;
    type Tuple = [T; 3];
    type Error = std::convert::Infallible;

    fn find(&self, s: Option<&T>, p: Option<&T>, o: Option<&T>) -> TupleSource<'_, Self> {
        let [s, p, o] = [s.cloned(), p.cloned(), o.cloned()];
        Box::new(
            self.iter()
                .filter(move |t| {
                    matches(s.as_ref(), &t[0])
                        && matches(p.as_ref(), &t[1])
                        && matches(o.as_ref(), &t[2])
                })
                .cloned()
                .map(Ok),
        )
    }
}

/// Whether `term` is matched by a pattern position (`None` matching anything).
#[inline]
pub fn matches<T: PartialEq>(pattern: Option<&T>, term: &T) -> bool {
    pattern.map_or(true, |p| p == term)
}

/// Adapts a source of triples into a source of quads,
/// all belonging to the same graph.
///
/// Quads are represented as `[g, s, p, o]`,
/// to be used with a [`QuadMapper`](crate::mapper::QuadMapper).
#[derive(Clone, Debug)]
pub struct InGraph<S, T> {
    source: S,
    graph_name: T,
}

impl<S, T> InGraph<S, T> {
    /// Wrap `source` so that all its triples belong to `graph_name`.
    pub fn new(source: S, graph_name: T) -> Self {
        InGraph { source, graph_name }
    }

    /// The graph name of all the quads yielded by this source.
    pub fn graph_name(&self) -> &T {
        &self.graph_name
    }
}

impl<S, T> Source for InGraph<S, T>
where
    S: Source<Term = T, Tuple = [T; 3]>,
    T: EngineTerm,
{
    type Term = T;
    type Tuple = [T; 4];
    type Error = S::Error;

    fn find(
        &self,
        s: Option<&Self::Term>,
        p: Option<&Self::Term>,
        o: Option<&Self::Term>,
    ) -> TupleSource<'_, Self> {
        let g = &self.graph_name;
        Box::new(
            self.source
                .find(s, p, o)
                .map_ok(move |[s, p, o]| [g.clone(), s, p, o]),
        )
    }
}
