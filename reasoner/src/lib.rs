//! A backward-chaining, RDFS-aware pattern matcher.
//!
//! [`RdfsSource`] wraps a raw [`Source`](rdfs_api::source::Source) of facts
//! and a closed [`Vocabulary`],
//! and answers triple patterns with both asserted *and entailed* facts,
//! without ever materializing the entailment closure.
//!
//! The supported entailments are those of rules rdfs2, rdfs3, rdfs7 and rdfs9
//! (see [`rules`]).
//! The class and property hierarchies themselves (`rdfs:subClassOf` and `rdfs:subPropertyOf` facts)
//! are *not* inferred: they are returned as stored in the source.
#![deny(missing_docs)]

use rdfs_api::mapper::{Hierarchy, RdfsTerms, TermMapper};
use rdfs_api::source::Source;
use rdfs_api::vocabulary::Vocabulary;

pub mod dispatch;
pub mod rules;

mod _dedup;
mod _source_impl;

use rules::RuleApplier;

/// Direction in a class or property hierarchy.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Towards super-classes or super-properties.
    Up,
    /// Towards sub-classes or sub-properties.
    Down,
}

/// An inference-aware [`Source`].
///
/// * `S` is the underlying source of asserted facts,
/// * `V` is the vocabulary describing the RDFS schema,
/// * `M` is the [`TermMapper`] used to decompose and build facts.
///
/// [`find`](Source::find) yields every fact matching the pattern,
/// that is either stored in `S` or entailed by it under `V`,
/// exactly once.
/// It is lazy: the underlying source is only queried as results are consumed.
#[derive(Clone, Debug)]
pub struct RdfsSource<S, V: Vocabulary, M> {
    source: S,
    rules: RuleApplier<V>,
    mapper: M,
}

impl<S, V, M> RdfsSource<S, V, M>
where
    M: TermMapper,
    S: Source<Term = M::Term, Tuple = M::Tuple>,
    V: Vocabulary<Term = M::Term>,
{
    /// Wrap `source`, interpreting it with `vocabulary`.
    pub fn new(source: S, vocabulary: V, mapper: M) -> Self {
        let rdfs = RdfsTerms::resolve(&mapper);
        log::debug!(
            "RDFS source with hints: classes={} properties={} domains={} ranges={}",
            vocabulary.has_class_declarations(),
            vocabulary.has_property_declarations(),
            vocabulary.has_domain_declarations(),
            vocabulary.has_range_declarations(),
        );
        RdfsSource {
            source,
            rules: RuleApplier::new(vocabulary, rdfs),
            mapper,
        }
    }

    /// The underlying source of asserted facts.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The vocabulary used to infer new facts.
    pub fn vocabulary(&self) -> &V {
        self.rules.vocabulary()
    }

    /// The mapper used to decompose and build facts.
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// The rule applier used to infer new facts.
    pub fn rules(&self) -> &RuleApplier<V> {
        &self.rules
    }

    /// The classes (resp. properties) above or below `term` in the vocabulary.
    ///
    /// If `inclusive` is true, `term` itself is yielded first.
    pub fn related<'a>(
        &'a self,
        hierarchy: Hierarchy,
        direction: Direction,
        term: &'a S::Term,
        inclusive: bool,
    ) -> impl Iterator<Item = &'a S::Term> + 'a {
        let voc = self.rules.vocabulary();
        let set = match (hierarchy, direction) {
            (Hierarchy::Class, Direction::Up) => voc.super_classes(term),
            (Hierarchy::Class, Direction::Down) => voc.sub_classes(term),
            (Hierarchy::Property, Direction::Up) => voc.super_properties(term),
            (Hierarchy::Property, Direction::Down) => voc.sub_properties(term),
        };
        inclusive
            .then_some(term)
            .into_iter()
            .chain(set.iter().filter(move |t| *t != term))
    }
}
