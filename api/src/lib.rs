//! This crate defines the abstractions
//! on which the RDFS-aware pattern matcher of `rdfs_reasoner` is built:
//!
//! * [terms](term) (anything that can be cloned, compared and hashed),
//! * [tuples](tuple) and the [`TermMapper`](mapper::TermMapper) bridging them to terms,
//! * [sources](source) of stored facts,
//! * closed RDFS [vocabularies](vocabulary).
//!
//! Implementations of sources and vocabularies can be found in `rdfs_inmem`.
#![deny(missing_docs)]

pub mod mapper;
pub mod ns;
pub mod prelude;
pub mod source;
pub mod term;
pub mod tuple;
pub mod vocabulary;
