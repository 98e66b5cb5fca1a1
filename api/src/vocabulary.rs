//! A [`Vocabulary`] is a read-only snapshot of an RDFS schema,
//! where class and property hierarchies are already transitively closed.
//!
//! All accessors return a (possibly empty) set of terms;
//! a term unknown to the vocabulary simply has no super/sub classes,
//! no domain, etc.
//!
//! Non-inclusive sets never contain the term they are about;
//! inclusive variants yield that term first, then the non-inclusive set.
use std::collections::HashSet;
use std::iter::once;

use crate::term::EngineTerm;

/// Type alias for the sets returned by a [`Vocabulary`].
pub type TermSet<V> = HashSet<<V as Vocabulary>::Term>;

/// Generic trait for closed RDFS vocabularies.
pub trait Vocabulary {
    /// The type of terms in this vocabulary.
    type Term: EngineTerm;

    /// All (direct or indirect) super-classes of `c`.
    fn super_classes(&self, c: &Self::Term) -> &TermSet<Self>;
    /// All (direct or indirect) sub-classes of `c`.
    fn sub_classes(&self, c: &Self::Term) -> &TermSet<Self>;
    /// All (direct or indirect) super-properties of `p`.
    fn super_properties(&self, p: &Self::Term) -> &TermSet<Self>;
    /// All (direct or indirect) sub-properties of `p`.
    fn sub_properties(&self, p: &Self::Term) -> &TermSet<Self>;
    /// The classes of all subjects of `p`.
    fn domain(&self, p: &Self::Term) -> &TermSet<Self>;
    /// The classes of all objects of `p`.
    fn range(&self, p: &Self::Term) -> &TermSet<Self>;
    /// All properties having `c` in their domain.
    fn properties_by_domain(&self, c: &Self::Term) -> &TermSet<Self>;
    /// All properties having `c` in their range.
    fn properties_by_range(&self, c: &Self::Term) -> &TermSet<Self>;

    /// `c` and all its super-classes.
    fn super_classes_inclusive<'a>(
        &'a self,
        c: &'a Self::Term,
    ) -> impl Iterator<Item = &'a Self::Term> + 'a {
        once(c).chain(self.super_classes(c).iter().filter(move |i| *i != c))
    }
    /// `c` and all its sub-classes.
    fn sub_classes_inclusive<'a>(
        &'a self,
        c: &'a Self::Term,
    ) -> impl Iterator<Item = &'a Self::Term> + 'a {
        once(c).chain(self.sub_classes(c).iter().filter(move |i| *i != c))
    }
    /// `p` and all its super-properties.
    fn super_properties_inclusive<'a>(
        &'a self,
        p: &'a Self::Term,
    ) -> impl Iterator<Item = &'a Self::Term> + 'a {
        once(p).chain(self.super_properties(p).iter().filter(move |i| *i != p))
    }
    /// `p` and all its sub-properties.
    fn sub_properties_inclusive<'a>(
        &'a self,
        p: &'a Self::Term,
    ) -> impl Iterator<Item = &'a Self::Term> + 'a {
        once(p).chain(self.sub_properties(p).iter().filter(move |i| *i != p))
    }

    /// Whether any `rdfs:subClassOf` is declared.
    ///
    /// Like all hints, this is only used to skip useless work;
    /// answering `true` is always safe.
    fn has_class_declarations(&self) -> bool {
        true
    }
    /// Whether any `rdfs:subPropertyOf` is declared.
    fn has_property_declarations(&self) -> bool {
        true
    }
    /// Whether any `rdfs:domain` is declared.
    fn has_domain_declarations(&self) -> bool {
        true
    }
    /// Whether any `rdfs:range` is declared.
    fn has_range_declarations(&self) -> bool {
        true
    }
    /// Whether `rdfs:subPropertyOf` is the *only* kind of declaration.
    ///
    /// When it is, `rdf:type` facts can only come from `rdf:type` and its sub-properties,
    /// which lets `rdf:type` patterns skip any class, domain or range lookup.
    /// Answering `false` is always safe.
    fn has_only_property_declarations(&self) -> bool {
        false
    }
}

impl<V: Vocabulary + ?Sized> Vocabulary for &V {
    type Term = V::Term;

    fn super_classes(&self, c: &Self::Term) -> &TermSet<Self> {
        V::super_classes(self, c)
    }
    fn sub_classes(&self, c: &Self::Term) -> &TermSet<Self> {
        V::sub_classes(self, c)
    }
    fn super_properties(&self, p: &Self::Term) -> &TermSet<Self> {
        V::super_properties(self, p)
    }
    fn sub_properties(&self, p: &Self::Term) -> &TermSet<Self> {
        V::sub_properties(self, p)
    }
    fn domain(&self, p: &Self::Term) -> &TermSet<Self> {
        V::domain(self, p)
    }
    fn range(&self, p: &Self::Term) -> &TermSet<Self> {
        V::range(self, p)
    }
    fn properties_by_domain(&self, c: &Self::Term) -> &TermSet<Self> {
        V::properties_by_domain(self, c)
    }
    fn properties_by_range(&self, c: &Self::Term) -> &TermSet<Self> {
        V::properties_by_range(self, c)
    }
    fn has_class_declarations(&self) -> bool {
        V::has_class_declarations(self)
    }
    fn has_property_declarations(&self) -> bool {
        V::has_property_declarations(self)
    }
    fn has_domain_declarations(&self) -> bool {
        V::has_domain_declarations(self)
    }
    fn has_range_declarations(&self) -> bool {
        V::has_range_declarations(self)
    }
    fn has_only_property_declarations(&self) -> bool {
        V::has_only_property_declarations(self)
    }
}
