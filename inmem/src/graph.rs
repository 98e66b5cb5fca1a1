//! In-memory [sources](Source) of triples.
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::iter::{empty, once};

use rdfs_api::mapper::TermMapper;
use rdfs_api::ns::{rdf, rdfs};
use rdfs_api::source::{Source, TupleSource};
use rdfs_api::term::{EngineTerm, FromIri};

use crate::_range_n::RangeN;
use crate::index::{Index, TermIndex};

/// A heavily indexed graph (SPO, POS and OSP indexes over interned terms).
/// Fast to query but slow to load, with a relatively high memory footprint.
///
/// Besides being a [`Source`] of `[T; 3]`,
/// it can be viewed as a source of interned identifiers (see [`ids`](Self::ids)).
#[derive(Clone, Debug)]
pub struct GenericMemGraph<T, I: Index> {
    terms: TermIndex<T, I>,
    spo: BTreeSet<[I; 3]>,
    pos: BTreeSet<[I; 3]>,
    osp: BTreeSet<[I; 3]>,
}

/// A [`GenericMemGraph`] using `u32` identifiers.
pub type MemGraph<T> = GenericMemGraph<T, u32>;

impl<T: EngineTerm + FromIri, I: Index> GenericMemGraph<T, I> {
    /// Build an empty graph.
    ///
    /// The RDF/RDFS terms used by the reasoner are always indexed,
    /// so that they have an identifier even when no triple uses them.
    pub fn new() -> Self {
        let mut terms = TermIndex::new();
        for iri in [
            rdf::type_,
            rdfs::subClassOf,
            rdfs::subPropertyOf,
            rdfs::domain,
            rdfs::range,
        ] {
            terms.ensure_index(T::from_iri(iri));
        }
        debug_assert_eq!(terms.len(), 5);
        Self {
            terms,
            spo: BTreeSet::new(),
            pos: BTreeSet::new(),
            osp: BTreeSet::new(),
        }
    }
}

impl<T: EngineTerm + FromIri, I: Index> Default for GenericMemGraph<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: EngineTerm, I: Index> GenericMemGraph<T, I> {
    /// Insert a triple in this graph.
    ///
    /// Return `true` iff the triple was not already present.
    pub fn insert(&mut self, s: T, p: T, o: T) -> bool {
        let si = self.terms.ensure_index(s);
        let pi = self.terms.ensure_index(p);
        let oi = self.terms.ensure_index(o);
        self.spo.insert([si, pi, oi]) && {
            self.pos.insert([pi, oi, si]);
            self.osp.insert([oi, si, pi]);
            true
        }
    }

    /// The number of triples in this graph.
    pub fn len(&self) -> usize {
        self.spo.len()
    }

    /// Whether this graph contains no triple.
    pub fn is_empty(&self) -> bool {
        self.spo.is_empty()
    }

    /// The identifier of `t`, if it is known to this graph.
    pub fn index_of(&self, t: &T) -> Option<I> {
        self.terms.get_index(t)
    }

    /// The term identified by `i`.
    ///
    /// # Precondition
    /// `i` must have been produced by this graph, otherwise this method may panic.
    pub fn term(&self, i: I) -> &T {
        self.terms.get_term(i)
    }

    /// View this graph as a source of interned identifiers.
    pub fn ids(&self) -> IdGraph<'_, T, I> {
        IdGraph(self)
    }

    /// A [`TermMapper`] for the identifiers of this graph.
    pub fn id_mapper(&self) -> IdMapper<'_, T, I> {
        IdMapper(&self.terms)
    }

    fn find_ids(
        &self,
        s: Option<I>,
        p: Option<I>,
        o: Option<I>,
    ) -> Box<dyn Iterator<Item = [I; 3]> + '_> {
        match (s, p, o) {
            (None, None, None) => Box::new(self.spo.iter().copied()),
            (Some(si), None, None) => Box::new(self.spo.range1(si).copied()),
            (None, Some(pi), None) => {
                Box::new(self.pos.range1(pi).map(|[p, o, s]| [*s, *p, *o]))
            }
            (None, None, Some(oi)) => {
                Box::new(self.osp.range1(oi).map(|[o, s, p]| [*s, *p, *o]))
            }
            (None, Some(pi), Some(oi)) => {
                Box::new(self.pos.range2(pi, oi).map(|[p, o, s]| [*s, *p, *o]))
            }
            (Some(si), None, Some(oi)) => {
                Box::new(self.osp.range2(oi, si).map(|[o, s, p]| [*s, *p, *o]))
            }
            (Some(si), Some(pi), None) => Box::new(self.spo.range2(si, pi).copied()),
            (Some(si), Some(pi), Some(oi)) => {
                if self.spo.contains(&[si, pi, oi]) {
                    Box::new(once([si, pi, oi]))
                } else {
                    Box::new(empty())
                }
            }
        }
    }
}

/// Resolve a pattern position to an identifier.
///
/// `Err` means that the term is unknown, so nothing can match.
fn resolve<I: Index>(pos: Option<Option<I>>) -> Result<Option<I>, ()> {
    match pos {
        None => Ok(None),
        Some(None) => Err(()),
        Some(Some(i)) => Ok(Some(i)),
    }
}

impl<T: EngineTerm, I: Index> Source for GenericMemGraph<T, I> {
    type Term = T;
    type Tuple = [T; 3];
    type Error = Infallible;

    fn find(&self, s: Option<&T>, p: Option<&T>, o: Option<&T>) -> TupleSource<'_, Self> {
        let (Ok(si), Ok(pi), Ok(oi)) = (
            resolve(s.map(|t| self.terms.get_index(t))),
            resolve(p.map(|t| self.terms.get_index(t))),
            resolve(o.map(|t| self.terms.get_index(t))),
        ) else {
            return Box::new(empty());
        };
        Box::new(
            self.find_ids(si, pi, oi)
                .map(move |ids| Ok(ids.map(|i| self.terms.get_term(i).clone()))),
        )
    }
}

impl<T: EngineTerm + FromIri, I: Index> FromIterator<[T; 3]> for GenericMemGraph<T, I> {
    fn from_iter<It: IntoIterator<Item = [T; 3]>>(iter: It) -> Self {
        let mut g = Self::new();
        g.extend(iter);
        g
    }
}

impl<T: EngineTerm, I: Index> Extend<[T; 3]> for GenericMemGraph<T, I> {
    fn extend<It: IntoIterator<Item = [T; 3]>>(&mut self, iter: It) {
        for [s, p, o] in iter {
            self.insert(s, p, o);
        }
    }
}

/// A view of a [`GenericMemGraph`] as a source of interned identifiers.
///
/// See [`GenericMemGraph::ids`].
#[derive(Debug)]
pub struct IdGraph<'a, T, I: Index>(&'a GenericMemGraph<T, I>);

impl<T, I: Index> Clone for IdGraph<'_, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, I: Index> Copy for IdGraph<'_, T, I> {}

impl<'a, T: EngineTerm, I: Index> IdGraph<'a, T, I> {
    /// The underlying graph.
    pub fn graph(&self) -> &'a GenericMemGraph<T, I> {
        self.0
    }

    /// Convert a triple of identifiers back to a triple of terms.
    pub fn to_terms(&self, ids: &[I; 3]) -> [T; 3] {
        ids.map(|i| self.0.term(i).clone())
    }
}

impl<'a, T: EngineTerm, I: Index> Source for IdGraph<'a, T, I> {
    type Term = I;
    type Tuple = [I; 3];
    type Error = Infallible;

    fn find(&self, s: Option<&I>, p: Option<&I>, o: Option<&I>) -> TupleSource<'_, Self> {
        Box::new(self.0.find_ids(s.copied(), p.copied(), o.copied()).map(Ok))
    }
}

/// A [`TermMapper`] for triples of identifiers of a given [`GenericMemGraph`].
///
/// See [`GenericMemGraph::id_mapper`].
#[derive(Debug)]
pub struct IdMapper<'a, T, I>(&'a TermIndex<T, I>);

impl<T, I> Clone for IdMapper<'_, T, I> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, I> Copy for IdMapper<'_, T, I> {}

impl<'a, T: EngineTerm + FromIri, I: Index> TermMapper for IdMapper<'a, T, I> {
    type Term = I;
    type Tuple = [I; 3];

    /// A term unknown to the graph is mapped to [`Index::MAX`],
    /// which is never allocated, hence never matches any triple.
    fn term_from_raw_id(&self, iri: &str) -> I {
        self.0.get_index(&T::from_iri(iri)).unwrap_or(I::MAX)
    }
    #[inline]
    fn subject<'t>(&self, tuple: &'t [I; 3]) -> &'t I {
        &tuple[0]
    }
    #[inline]
    fn predicate<'t>(&self, tuple: &'t [I; 3]) -> &'t I {
        &tuple[1]
    }
    #[inline]
    fn object<'t>(&self, tuple: &'t [I; 3]) -> &'t I {
        &tuple[2]
    }
    fn make_tuple(&self, s: I, p: I, o: I) -> [I; 3] {
        [s, p, o]
    }
}
