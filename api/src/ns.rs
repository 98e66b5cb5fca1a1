//! Standard namespaces.
//!
//! Terms are plain IRI strings,
//! to be turned into an engine term by [`TermMapper::term_from_raw_id`](crate::mapper::TermMapper::term_from_raw_id).
//!
//! NB: since `type` is a reserved keyword in Rust,
//! the term `rdf:type` spells `rdf::type_` (with a trailing underscore).

/// Create a "namespace module" defining a set of IRIs sharing a given prefix.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            $crate::ns_iri!($iri_prefix, $suffix);
        )*
        $(
            $crate::ns_iri!($iri_prefix, $r_id, $r_sf);
        )*
    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// Create an IRI in a "namespace module".
/// In general, you should use the [`namespace!`](macro.namespace.html) macro instead.
#[macro_export]
macro_rules! ns_iri {
    ($prefix:literal, $ident:ident) => {
        #[allow(non_upper_case_globals)]
        #[doc = concat!("The IRI `", $prefix, stringify!($ident), "`")]
        pub const $ident: &str = concat!($prefix, stringify!($ident));
    };
    ($prefix:literal, $ident:ident, $suffix:literal) => {
        #[allow(non_upper_case_globals)]
        #[doc = concat!("The IRI `", $prefix, $suffix, "`")]
        pub const $ident: &str = concat!($prefix, $suffix);
    };
}

/// The standard `rdf:` namespace (restricted to `rdf:type`).
pub mod rdf {
    /// Prefix used in this namespace.
    pub const PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    ns_iri!("http://www.w3.org/1999/02/22-rdf-syntax-ns#", type_, "type");
}

/// The standard `rdfs:` namespace (restricted to the schema properties).
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        domain,
        range,
        subClassOf,
        subPropertyOf
    );
}
