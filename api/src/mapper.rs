//! A [`TermMapper`] decouples the matching engine
//! from a specific term encoding and a specific tuple shape.
//!
//! It knows how to extract the subject, predicate and object of a tuple,
//! how to build a new tuple (of the same shape) from three terms,
//! and how to turn a raw IRI into a term.
//! The latter is used once, at construction time,
//! to resolve the fixed RDFS vocabulary (see [`RdfsTerms`]).
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::ns::{rdf, rdfs};
use crate::term::{EngineTerm, FromIri};
use crate::tuple::Tuple;

/// Bridge between tuples and the terms they contain.
pub trait TermMapper {
    /// The type of terms handled by the engine.
    type Term: EngineTerm;
    /// The type of facts handled by the engine.
    type Tuple: Clone + Debug + Eq + Hash;

    /// Map a raw identifier (an IRI) to a term.
    fn term_from_raw_id(&self, iri: &str) -> Self::Term;
    /// The subject of `tuple`.
    fn subject<'t>(&self, tuple: &'t Self::Tuple) -> &'t Self::Term;
    /// The predicate of `tuple`.
    fn predicate<'t>(&self, tuple: &'t Self::Tuple) -> &'t Self::Term;
    /// The object of `tuple`.
    fn object<'t>(&self, tuple: &'t Self::Tuple) -> &'t Self::Term;
    /// Build a tuple from three terms.
    ///
    /// Leading fields (if any) are those captured when this mapper was built.
    fn make_tuple(&self, s: Self::Term, p: Self::Term, o: Self::Term) -> Self::Tuple;

    /// The subject, predicate and object of `tuple`, cloned.
    fn spo(&self, tuple: &Self::Tuple) -> [Self::Term; 3] {
        [
            self.subject(tuple).clone(),
            self.predicate(tuple).clone(),
            self.object(tuple).clone(),
        ]
    }
}

impl<M: TermMapper + ?Sized> TermMapper for &M {
    type Term = M::Term;
    type Tuple = M::Tuple;

    fn term_from_raw_id(&self, iri: &str) -> Self::Term {
        M::term_from_raw_id(self, iri)
    }
    fn subject<'t>(&self, tuple: &'t Self::Tuple) -> &'t Self::Term {
        M::subject(self, tuple)
    }
    fn predicate<'t>(&self, tuple: &'t Self::Tuple) -> &'t Self::Term {
        M::predicate(self, tuple)
    }
    fn object<'t>(&self, tuple: &'t Self::Tuple) -> &'t Self::Term {
        M::object(self, tuple)
    }
    fn make_tuple(&self, s: Self::Term, p: Self::Term, o: Self::Term) -> Self::Tuple {
        M::make_tuple(self, s, p, o)
    }
}

/// Which hierarchy a schema predicate describes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Hierarchy {
    /// The class hierarchy (`rdfs:subClassOf`)
    Class,
    /// The property hierarchy (`rdfs:subPropertyOf`)
    Property,
}

/// The fixed RDF/RDFS terms that the engine needs to recognize,
/// resolved once through a [`TermMapper`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RdfsTerms<T> {
    /// `rdf:type`
    pub type_: T,
    /// `rdfs:subClassOf`
    pub sub_class_of: T,
    /// `rdfs:subPropertyOf`
    pub sub_property_of: T,
    /// `rdfs:domain`
    pub domain: T,
    /// `rdfs:range`
    pub range: T,
}

impl<T: EngineTerm> RdfsTerms<T> {
    /// Resolve the fixed vocabulary with the given mapper.
    pub fn resolve<M: TermMapper<Term = T> + ?Sized>(mapper: &M) -> Self {
        RdfsTerms {
            type_: mapper.term_from_raw_id(rdf::type_),
            sub_class_of: mapper.term_from_raw_id(rdfs::subClassOf),
            sub_property_of: mapper.term_from_raw_id(rdfs::subPropertyOf),
            domain: mapper.term_from_raw_id(rdfs::domain),
            range: mapper.term_from_raw_id(rdfs::range),
        }
    }

    /// Whether `p` is `rdfs:subClassOf` or `rdfs:subPropertyOf`.
    pub fn is_hierarchy(&self, p: &T) -> bool {
        *p == self.sub_class_of || *p == self.sub_property_of
    }

    /// The hierarchy described by `p`.
    ///
    /// # Panics
    /// If `p` is neither `rdfs:subClassOf` nor `rdfs:subPropertyOf`.
    /// Callers are expected to check [`is_hierarchy`](Self::is_hierarchy) first,
    /// so this denotes a bug in the caller.
    pub fn hierarchy_of(&self, p: &T) -> Hierarchy {
        if *p == self.sub_class_of {
            Hierarchy::Class
        } else if *p == self.sub_property_of {
            Hierarchy::Property
        } else {
            panic!("{p:?} is neither rdfs:subClassOf nor rdfs:subPropertyOf")
        }
    }
}

/// A [`TermMapper`] for triples represented as `[T; 3]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TripleMapper<T>(PhantomData<T>);

impl<T> TripleMapper<T> {
    /// Build a new triple mapper.
    pub fn new() -> Self {
        TripleMapper(PhantomData)
    }
}

impl<T: EngineTerm + FromIri> TermMapper for TripleMapper<T> {
    type Term = T;
    type Tuple = [T; 3];

    fn term_from_raw_id(&self, iri: &str) -> T {
        T::from_iri(iri)
    }
    #[inline]
    fn subject<'t>(&self, tuple: &'t [T; 3]) -> &'t T {
        &tuple[0]
    }
    #[inline]
    fn predicate<'t>(&self, tuple: &'t [T; 3]) -> &'t T {
        &tuple[1]
    }
    #[inline]
    fn object<'t>(&self, tuple: &'t [T; 3]) -> &'t T {
        &tuple[2]
    }
    fn make_tuple(&self, s: T, p: T, o: T) -> [T; 3] {
        [s, p, o]
    }
}

/// A [`TermMapper`] for quads represented as `[T; 4]`, graph name first.
///
/// Built tuples all belong to the graph name given at construction.
#[derive(Clone, Debug)]
pub struct QuadMapper<T> {
    graph_name: T,
}

impl<T> QuadMapper<T> {
    /// Build a quad mapper producing quads in `graph_name`.
    pub fn new(graph_name: T) -> Self {
        QuadMapper { graph_name }
    }

    /// The graph name of the quads produced by this mapper.
    pub fn graph_name(&self) -> &T {
        &self.graph_name
    }
}

impl<T: EngineTerm + FromIri> TermMapper for QuadMapper<T> {
    type Term = T;
    type Tuple = [T; 4];

    fn term_from_raw_id(&self, iri: &str) -> T {
        T::from_iri(iri)
    }
    #[inline]
    fn subject<'t>(&self, tuple: &'t [T; 4]) -> &'t T {
        &tuple[1]
    }
    #[inline]
    fn predicate<'t>(&self, tuple: &'t [T; 4]) -> &'t T {
        &tuple[2]
    }
    #[inline]
    fn object<'t>(&self, tuple: &'t [T; 4]) -> &'t T {
        &tuple[3]
    }
    fn make_tuple(&self, s: T, p: T, o: T) -> [T; 4] {
        [self.graph_name.clone(), s, p, o]
    }
}

/// A [`TermMapper`] for [`Tuple`]s of any arity.
///
/// Built tuples all start with the leading fields given at construction.
#[derive(Clone, Debug)]
pub struct TupleMapper<T> {
    prefix: Box<[T]>,
}

impl<T> TupleMapper<T> {
    /// Build a tuple mapper producing tuples starting with `prefix`.
    pub fn new<I: IntoIterator<Item = T>>(prefix: I) -> Self {
        TupleMapper {
            prefix: prefix.into_iter().collect(),
        }
    }

    /// The arity of the tuples produced by this mapper.
    pub fn arity(&self) -> usize {
        self.prefix.len() + 3
    }
}

impl<T: EngineTerm + FromIri> TermMapper for TupleMapper<T> {
    type Term = T;
    type Tuple = Tuple<T>;

    fn term_from_raw_id(&self, iri: &str) -> T {
        T::from_iri(iri)
    }
    fn subject<'t>(&self, tuple: &'t Tuple<T>) -> &'t T {
        tuple.s()
    }
    fn predicate<'t>(&self, tuple: &'t Tuple<T>) -> &'t T {
        tuple.p()
    }
    fn object<'t>(&self, tuple: &'t Tuple<T>) -> &'t T {
        tuple.o()
    }
    fn make_tuple(&self, s: T, p: T, o: T) -> Tuple<T> {
        let items = self.prefix.iter().cloned().chain([s, p, o]);
        match Tuple::new(items) {
            Ok(tuple) => tuple,
            Err(_) => unreachable!("a prefix followed by s, p, o has at least 3 items"),
        }
    }
}
