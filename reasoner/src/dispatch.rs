//! Classification of triple patterns,
//! used by [`RdfsSource`](crate::RdfsSource) to pick a matching strategy.
use rdfs_api::mapper::{Hierarchy, RdfsTerms};
use rdfs_api::term::EngineTerm;

/// Which positions of a pattern are concrete, together with their values.
#[derive(Debug, Eq, PartialEq)]
pub enum Shape<'a, T> {
    /// `(?, ?, ?)`
    AllWild,
    /// `(s, ?, ?)`
    SubjOnly(&'a T),
    /// `(?, p, ?)`
    PredOnly(&'a T),
    /// `(?, ?, o)`
    ObjOnly(&'a T),
    /// `(s, p, ?)`
    SubjPred(&'a T, &'a T),
    /// `(s, ?, o)`
    SubjObj(&'a T, &'a T),
    /// `(?, p, o)`
    PredObj(&'a T, &'a T),
    /// `(s, p, o)`
    AllBound(&'a T, &'a T, &'a T),
}

impl<'a, T> Shape<'a, T> {
    /// The shape of pattern `(s, p, o)`, where `None` is a wildcard.
    pub fn of(s: Option<&'a T>, p: Option<&'a T>, o: Option<&'a T>) -> Self {
        match (s, p, o) {
            (None, None, None) => Shape::AllWild,
            (Some(s), None, None) => Shape::SubjOnly(s),
            (None, Some(p), None) => Shape::PredOnly(p),
            (None, None, Some(o)) => Shape::ObjOnly(o),
            (Some(s), Some(p), None) => Shape::SubjPred(s, p),
            (Some(s), None, Some(o)) => Shape::SubjObj(s, o),
            (None, Some(p), Some(o)) => Shape::PredObj(p, o),
            (Some(s), Some(p), Some(o)) => Shape::AllBound(s, p, o),
        }
    }
}

/// How the predicate of a pattern is handled.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PredicateKind {
    /// `rdf:type`
    RdfType,
    /// `rdfs:subClassOf` or `rdfs:subPropertyOf`
    SubClassOrSubProperty(Hierarchy),
    /// no predicate
    Wildcard,
    /// any other predicate
    Ordinary,
}

impl PredicateKind {
    /// Classify predicate `p`, where `None` is a wildcard.
    pub fn of<T: EngineTerm>(p: Option<&T>, rdfs: &RdfsTerms<T>) -> Self {
        match p {
            None => PredicateKind::Wildcard,
            Some(p) if *p == rdfs.type_ => PredicateKind::RdfType,
            Some(p) if rdfs.is_hierarchy(p) => {
                PredicateKind::SubClassOrSubProperty(rdfs.hierarchy_of(p))
            }
            Some(_) => PredicateKind::Ordinary,
        }
    }
}
