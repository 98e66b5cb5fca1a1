//! This crate provides in-memory implementations
//! of the [sources](rdfs_api::source::Source) and [vocabularies](rdfs_api::vocabulary::Vocabulary)
//! used by `rdfs_reasoner`:
//!
//! * [`MemGraph`](graph::MemGraph), an indexed graph of interned terms,
//!   which can also be seen as a source of interned identifiers;
//! * [`ClosedVocabulary`](vocabulary::ClosedVocabulary),
//!   built by hand or extracted from any source.

pub mod graph;
pub mod index;
pub mod vocabulary;

mod _range_n;
