//! An in-memory, closed [`Vocabulary`].
//!
//! A [`ClosedVocabulary`] is obtained from a [`VocabularyBuilder`],
//! either fed by hand or [extracted from a source](ClosedVocabulary::from_source).
//! It can not be modified once built.
use std::collections::{HashMap, HashSet};

use rdfs_api::mapper::{RdfsTerms, TermMapper};
use rdfs_api::source::Source;
use rdfs_api::term::EngineTerm;
use rdfs_api::vocabulary::{TermSet, Vocabulary};

type Map<T> = HashMap<T, HashSet<T>>;

/// Collects RDFS schema declarations,
/// in order to [build](Self::build) a [`ClosedVocabulary`].
#[derive(Clone, Debug)]
pub struct VocabularyBuilder<T> {
    sub_class_of: Map<T>,
    sub_property_of: Map<T>,
    domain: Map<T>,
    range: Map<T>,
}

impl<T> Default for VocabularyBuilder<T> {
    fn default() -> Self {
        VocabularyBuilder {
            sub_class_of: HashMap::new(),
            sub_property_of: HashMap::new(),
            domain: HashMap::new(),
            range: HashMap::new(),
        }
    }
}

impl<T: EngineTerm> VocabularyBuilder<T> {
    /// Build an empty vocabulary builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `c1 rdfs:subClassOf c2`.
    pub fn sub_class_of(&mut self, c1: T, c2: T) -> &mut Self {
        self.sub_class_of.entry(c1).or_default().insert(c2);
        self
    }

    /// Declare `p1 rdfs:subPropertyOf p2`.
    pub fn sub_property_of(&mut self, p1: T, p2: T) -> &mut Self {
        self.sub_property_of.entry(p1).or_default().insert(p2);
        self
    }

    /// Declare `p rdfs:domain c`.
    pub fn domain(&mut self, p: T, c: T) -> &mut Self {
        self.domain.entry(p).or_default().insert(c);
        self
    }

    /// Declare `p rdfs:range c`.
    pub fn range(&mut self, p: T, c: T) -> &mut Self {
        self.range.entry(p).or_default().insert(c);
        self
    }

    /// Close the declared hierarchies, and build the corresponding vocabulary.
    pub fn build(&self) -> ClosedVocabulary<T> {
        let super_classes = closure(&self.sub_class_of);
        let sub_classes = inverse(&super_classes);
        let super_properties = closure(&self.sub_property_of);
        let sub_properties = inverse(&super_properties);
        let domain = inherit(&self.domain, &super_properties);
        let range = inherit(&self.range, &super_properties);
        let properties_by_domain = inverse(&domain);
        let properties_by_range = inverse(&range);
        log::debug!(
            "closed vocabulary: {} classes in hierarchy, {} properties in hierarchy, {} domains, {} ranges",
            super_classes.len() + sub_classes.len(),
            super_properties.len() + sub_properties.len(),
            domain.len(),
            range.len(),
        );
        ClosedVocabulary {
            super_classes,
            sub_classes,
            super_properties,
            sub_properties,
            domain,
            range,
            properties_by_domain,
            properties_by_range,
            empty: HashSet::new(),
        }
    }
}

/// A read-only, transitively closed [`Vocabulary`].
#[derive(Clone, Debug)]
pub struct ClosedVocabulary<T> {
    super_classes: Map<T>,
    sub_classes: Map<T>,
    super_properties: Map<T>,
    sub_properties: Map<T>,
    domain: Map<T>,
    range: Map<T>,
    properties_by_domain: Map<T>,
    properties_by_range: Map<T>,
    empty: HashSet<T>,
}

impl<T: EngineTerm> ClosedVocabulary<T> {
    /// Extract the schema declarations
    /// (`rdfs:subClassOf`, `rdfs:subPropertyOf`, `rdfs:domain`, `rdfs:range`)
    /// stored in `source`, and build the corresponding vocabulary.
    ///
    /// Only the asserted declarations are considered,
    /// so `source` should be a raw source rather than an inference-aware one.
    pub fn from_source<S, M>(source: &S, mapper: &M) -> Result<Self, S::Error>
    where
        S: Source<Term = T, Tuple = M::Tuple> + ?Sized,
        M: TermMapper<Term = T> + ?Sized,
    {
        let rdfs = RdfsTerms::resolve(mapper);
        let mut builder = VocabularyBuilder::new();
        let declarations: [(&T, Declare<T>); 4] = [
            (&rdfs.sub_class_of, VocabularyBuilder::sub_class_of),
            (&rdfs.sub_property_of, VocabularyBuilder::sub_property_of),
            (&rdfs.domain, VocabularyBuilder::domain),
            (&rdfs.range, VocabularyBuilder::range),
        ];
        for (pred, declare) in declarations {
            for tuple in source.find(None, Some(pred), None) {
                let tuple = tuple?;
                let [s, _, o] = mapper.spo(&tuple);
                declare(&mut builder, s, o);
            }
        }
        Ok(builder.build())
    }

    fn get<'a>(&'a self, map: &'a Map<T>, key: &T) -> &'a HashSet<T> {
        map.get(key).unwrap_or(&self.empty)
    }
}

type Declare<T> = fn(&mut VocabularyBuilder<T>, T, T) -> &mut VocabularyBuilder<T>;

impl<T: EngineTerm> Vocabulary for ClosedVocabulary<T> {
    type Term = T;

    fn super_classes(&self, c: &T) -> &TermSet<Self> {
        self.get(&self.super_classes, c)
    }
    fn sub_classes(&self, c: &T) -> &TermSet<Self> {
        self.get(&self.sub_classes, c)
    }
    fn super_properties(&self, p: &T) -> &TermSet<Self> {
        self.get(&self.super_properties, p)
    }
    fn sub_properties(&self, p: &T) -> &TermSet<Self> {
        self.get(&self.sub_properties, p)
    }
    fn domain(&self, p: &T) -> &TermSet<Self> {
        self.get(&self.domain, p)
    }
    fn range(&self, p: &T) -> &TermSet<Self> {
        self.get(&self.range, p)
    }
    fn properties_by_domain(&self, c: &T) -> &TermSet<Self> {
        self.get(&self.properties_by_domain, c)
    }
    fn properties_by_range(&self, c: &T) -> &TermSet<Self> {
        self.get(&self.properties_by_range, c)
    }

    fn has_class_declarations(&self) -> bool {
        !self.super_classes.is_empty()
    }
    fn has_property_declarations(&self) -> bool {
        !self.super_properties.is_empty()
    }
    fn has_domain_declarations(&self) -> bool {
        !self.domain.is_empty()
    }
    fn has_range_declarations(&self) -> bool {
        !self.range.is_empty()
    }
    fn has_only_property_declarations(&self) -> bool {
        self.has_property_declarations()
            && !self.has_class_declarations()
            && !self.has_domain_declarations()
            && !self.has_range_declarations()
    }
}

/// Everything reachable from each key of `direct`, except the key itself.
fn closure<T: EngineTerm>(direct: &Map<T>) -> Map<T> {
    direct
        .keys()
        .map(|key| {
            let mut reached = HashSet::new();
            let mut todo = vec![key];
            while let Some(t) = todo.pop() {
                for next in direct.get(t).into_iter().flatten() {
                    if reached.insert(next.clone()) {
                        todo.push(next);
                    }
                }
            }
            reached.remove(key);
            (key.clone(), reached)
        })
        .filter(|(_, reached)| !reached.is_empty())
        .collect()
}

fn inverse<T: EngineTerm>(map: &Map<T>) -> Map<T> {
    let mut inv = Map::new();
    for (k, vs) in map {
        for v in vs {
            inv.entry(v.clone())
                .or_insert_with(HashSet::new)
                .insert(k.clone());
        }
    }
    inv
}

/// Extend the domain (or range) of each property with those of its super-properties.
fn inherit<T: EngineTerm>(direct: &Map<T>, super_properties: &Map<T>) -> Map<T> {
    let mut ret = direct.clone();
    for (p, supers) in super_properties {
        let inherited: HashSet<T> = supers
            .iter()
            .filter_map(|q| direct.get(q))
            .flatten()
            .cloned()
            .collect();
        if !inherited.is_empty() {
            ret.entry(p.clone()).or_default().extend(inherited);
        }
    }
    ret
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::MemGraph;
    use rdfs_api::mapper::TripleMapper;
    use rdfs_api::ns::{rdf, rdfs};
    use rdfs_api::term::SimpleTerm;

    fn t(s: &str) -> SimpleTerm {
        SimpleTerm::iri(&format!("tag:{s}"))
    }

    fn set<const N: usize>(items: [&str; N]) -> HashSet<SimpleTerm> {
        items.into_iter().map(t).collect()
    }

    #[test]
    fn empty() {
        let v = VocabularyBuilder::<SimpleTerm>::new().build();
        assert!(v.super_classes(&t("a")).is_empty());
        assert!(v.domain(&t("p")).is_empty());
        assert!(!v.has_class_declarations());
        assert!(!v.has_property_declarations());
        assert!(!v.has_domain_declarations());
        assert!(!v.has_range_declarations());
        assert!(!v.has_only_property_declarations());
        assert_eq!(v.sub_classes_inclusive(&t("a")).count(), 1);
    }

    #[test]
    fn class_closure() {
        let v = VocabularyBuilder::new()
            .sub_class_of(t("a"), t("b"))
            .sub_class_of(t("b"), t("c"))
            .sub_class_of(t("b"), t("d"))
            .build();
        assert_eq!(v.super_classes(&t("a")), &set(["b", "c", "d"]));
        assert_eq!(v.super_classes(&t("b")), &set(["c", "d"]));
        assert!(v.super_classes(&t("c")).is_empty());
        assert_eq!(v.sub_classes(&t("c")), &set(["a", "b"]));
        assert_eq!(v.sub_classes(&t("b")), &set(["a"]));
        let incl: Vec<_> = v.super_classes_inclusive(&t("b")).cloned().collect();
        assert_eq!(incl[0], t("b"));
        assert_eq!(incl.len(), 3);
        assert!(v.has_class_declarations());
        assert!(!v.has_only_property_declarations());
    }

    #[test]
    fn cycles() {
        let v = VocabularyBuilder::new()
            .sub_class_of(t("a"), t("b"))
            .sub_class_of(t("b"), t("c"))
            .sub_class_of(t("c"), t("a"))
            .sub_class_of(t("d"), t("d"))
            .build();
        assert_eq!(v.super_classes(&t("a")), &set(["b", "c"]));
        assert_eq!(v.sub_classes(&t("a")), &set(["b", "c"]));
        assert!(v.super_classes(&t("d")).is_empty());
        assert!(v.sub_classes(&t("d")).is_empty());
        assert_eq!(v.super_classes_inclusive(&t("c")).count(), 3);
    }

    #[test]
    fn domain_and_range_are_inherited() {
        let v = VocabularyBuilder::new()
            .sub_property_of(t("ownsPet"), t("hasPet"))
            .domain(t("hasPet"), t("Person"))
            .range(t("hasPet"), t("Animal"))
            .build();
        assert_eq!(v.super_properties(&t("ownsPet")), &set(["hasPet"]));
        assert_eq!(v.sub_properties(&t("hasPet")), &set(["ownsPet"]));
        assert_eq!(v.domain(&t("ownsPet")), &set(["Person"]));
        assert_eq!(v.range(&t("ownsPet")), &set(["Animal"]));
        assert_eq!(
            v.properties_by_domain(&t("Person")),
            &set(["hasPet", "ownsPet"])
        );
        assert_eq!(
            v.properties_by_range(&t("Animal")),
            &set(["hasPet", "ownsPet"])
        );
        assert!(v.has_domain_declarations());
        assert!(v.has_range_declarations());
        assert!(!v.has_class_declarations());
    }

    #[test]
    fn only_property_declarations() {
        let v = VocabularyBuilder::new()
            .sub_property_of(t("p"), t("q"))
            .build();
        assert!(v.has_only_property_declarations());
    }

    #[test]
    fn from_source() {
        let _ = env_logger::builder().is_test(true).try_init();
        let schema = |iri: &str| SimpleTerm::iri(iri);
        let g: MemGraph<SimpleTerm> = [
            [t("Dog"), schema(rdfs::subClassOf), t("Animal")],
            [t("ownsPet"), schema(rdfs::subPropertyOf), t("hasPet")],
            [t("hasPet"), schema(rdfs::domain), t("Person")],
            [t("hasPet"), schema(rdfs::range), t("Animal")],
            [t("rex"), schema(rdf::type_), t("Dog")],
        ]
        .into_iter()
        .collect();
        let v = ClosedVocabulary::from_source(&g, &TripleMapper::new()).unwrap();
        assert_eq!(v.super_classes(&t("Dog")), &set(["Animal"]));
        assert_eq!(v.super_properties(&t("ownsPet")), &set(["hasPet"]));
        assert_eq!(v.domain(&t("ownsPet")), &set(["Person"]));
        assert_eq!(v.range(&t("hasPet")), &set(["Animal"]));
        assert!(v.super_classes(&t("rex")).is_empty());

        let ids = g.ids();
        let vi = ClosedVocabulary::from_source(&ids, &g.id_mapper()).unwrap();
        let dog = g.index_of(&t("Dog")).unwrap();
        let animal = g.index_of(&t("Animal")).unwrap();
        assert!(vi.super_classes(&dog).contains(&animal));
    }
}
