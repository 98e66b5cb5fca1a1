//! Terms are the building blocks of facts.
//!
//! The matching engine never looks inside a term:
//! it only clones, compares and hashes them (see [`EngineTerm`]).
//! This allows the same engine to work on full terms (e.g. [`SimpleTerm`])
//! as well as on interned identifiers (e.g. `u32`).
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The capabilities required from a term by the matching engine.
///
/// Equality is by value, never by identity.
/// This trait is blanket-implemented, it should not be implemented explicitly.
pub trait EngineTerm: Clone + Eq + Hash + fmt::Debug {}
impl<T> EngineTerm for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Terms that can be built from a raw IRI.
///
/// This is how the fixed RDF/RDFS vocabulary is injected into a term type.
pub trait FromIri {
    /// Build the term representing `iri`.
    fn from_iri(iri: &str) -> Self;
}

impl FromIri for Arc<str> {
    fn from_iri(iri: &str) -> Self {
        iri.into()
    }
}

impl FromIri for String {
    fn from_iri(iri: &str) -> Self {
        iri.to_string()
    }
}

/// A straightforward owned term, either an IRI or a blank node.
///
/// Cloning is cheap, as the underlying text is reference-counted.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SimpleTerm {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(Arc<str>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(Arc<str>),
}

impl SimpleTerm {
    /// Build an IRI term.
    ///
    /// NB: the IRI is not checked for validity.
    pub fn iri(iri: &str) -> Self {
        SimpleTerm::Iri(iri.into())
    }

    /// Build a blank node.
    pub fn bnode(id: &str) -> Self {
        SimpleTerm::BlankNode(id.into())
    }
}

impl FromIri for SimpleTerm {
    fn from_iri(iri: &str) -> Self {
        Self::iri(iri)
    }
}
