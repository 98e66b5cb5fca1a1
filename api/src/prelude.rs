//! General-use types and traits.

pub use crate::mapper::{QuadMapper, RdfsTerms, TermMapper, TripleMapper, TupleMapper};
pub use crate::source::Source;
pub use crate::term::{EngineTerm, FromIri, SimpleTerm};
pub use crate::tuple::Tuple;
pub use crate::vocabulary::Vocabulary;
