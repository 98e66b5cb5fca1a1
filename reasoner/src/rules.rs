//! One-hop application of the RDFS entailment rules.
//!
//! | rule | premises                                  | conclusion      | RDFS rules      |
//! |------|-------------------------------------------|-----------------|-----------------|
//! | R1   | `s rdf:type c`, `c ⊑ d`                   | `s rdf:type d`  | rdfs9           |
//! | R2   | `s p o`, `p ⊑ q`                          | `s q o`         | rdfs7           |
//! | R3   | `s p o`, `p rdfs:domain c`, `c ⊑* d`      | `s rdf:type d`  | rdfs2 + rdfs9   |
//! | R4   | `s p o`, `p rdfs:range c`, `c ⊑* d`       | `o rdf:type d`  | rdfs3 + rdfs9   |
//!
//! Since the [`Vocabulary`] is transitively closed,
//! R3 and R4 only apply R1 once to the type they derive,
//! and so does R2 when `q` is `rdf:type`.
use rdfs_api::mapper::RdfsTerms;
use rdfs_api::vocabulary::Vocabulary;

/// Computes the direct RDFS consequences of a single fact.
///
/// Each rule is skipped when the corresponding [hint](Vocabulary::has_class_declarations)
/// of the vocabulary says that it can not apply.
#[derive(Clone, Debug)]
pub struct RuleApplier<V: Vocabulary> {
    vocabulary: V,
    rdfs: RdfsTerms<V::Term>,
}

impl<V: Vocabulary> RuleApplier<V> {
    /// Build a rule applier for the given vocabulary.
    ///
    /// `rdfs` must have been [resolved](RdfsTerms::resolve)
    /// with the mapper of the facts that will be passed to this applier.
    pub fn new(vocabulary: V, rdfs: RdfsTerms<V::Term>) -> Self {
        RuleApplier { vocabulary, rdfs }
    }

    /// The vocabulary used by this applier.
    pub fn vocabulary(&self) -> &V {
        &self.vocabulary
    }

    /// The RDF/RDFS terms known to this applier.
    pub fn rdfs(&self) -> &RdfsTerms<V::Term> {
        &self.rdfs
    }

    /// Call `emit` on every fact derived from `(s, p, o)` by one application of R1–R4.
    ///
    /// The same fact may be emitted several times (by different rules).
    pub fn apply_rules<F>(&self, s: &V::Term, p: &V::Term, o: &V::Term, mut emit: F)
    where
        F: FnMut(V::Term, V::Term, V::Term),
    {
        let voc = &self.vocabulary;
        if *p == self.rdfs.type_ {
            self.apply_subclass_rule(s, o, &mut emit);
        }
        if voc.has_property_declarations() {
            for q in voc.super_properties(p) {
                emit(s.clone(), q.clone(), o.clone());
                if *q == self.rdfs.type_ {
                    self.apply_subclass_rule(s, o, &mut emit);
                }
            }
        }
        if voc.has_domain_declarations() {
            for c in voc.domain(p) {
                emit(s.clone(), self.rdfs.type_.clone(), c.clone());
                self.apply_subclass_rule(s, c, &mut emit);
            }
        }
        if voc.has_range_declarations() {
            for c in voc.range(p) {
                emit(o.clone(), self.rdfs.type_.clone(), c.clone());
                self.apply_subclass_rule(o, c, &mut emit);
            }
        }
    }

    /// Call `emit` on every fact derived from `(s, rdf:type, c)` by R1 only.
    pub fn apply_subclass_rule<F>(&self, s: &V::Term, c: &V::Term, mut emit: F)
    where
        F: FnMut(V::Term, V::Term, V::Term),
    {
        if self.vocabulary.has_class_declarations() {
            for d in self.vocabulary.super_classes(c) {
                emit(s.clone(), self.rdfs.type_.clone(), d.clone());
            }
        }
    }

    /// Collect the facts emitted by [`apply_rules`](Self::apply_rules).
    pub fn consequences(&self, s: &V::Term, p: &V::Term, o: &V::Term) -> Vec<[V::Term; 3]> {
        let mut ret = vec![];
        self.apply_rules(s, p, o, |s, p, o| ret.push([s, p, o]));
        ret
    }
}
