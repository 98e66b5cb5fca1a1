use std::collections::HashSet;
use std::iter::once_with;

use rdfs_api::mapper::TermMapper;
use rdfs_api::source::{matches, Source, TupleSource};
use rdfs_api::vocabulary::Vocabulary;
use resiter::filter::*;
use resiter::flat_map::*;
use resiter::map::*;

use crate::_dedup::ResultIteratorDedup;
use crate::dispatch::{PredicateKind, Shape};
use crate::RdfsSource;

impl<S, V, M> Source for RdfsSource<S, V, M>
where
    M: TermMapper,
    S: Source<Term = M::Term, Tuple = M::Tuple>,
    V: Vocabulary<Term = M::Term>,
{
    type Term = M::Term;
    type Tuple = M::Tuple;
    type Error = S::Error;

    fn find(
        &self,
        s: Option<&Self::Term>,
        p: Option<&Self::Term>,
        o: Option<&Self::Term>,
    ) -> TupleSource<'_, Self> {
        use PredicateKind::*;
        use Shape::*;

        let shape = Shape::of(s, p, o);
        let kind = PredicateKind::of(p, self.rules.rdfs());
        log::trace!("find {shape:?} with {kind:?} predicate");
        match (shape, kind) {
            (AllBound(_, p, _) | SubjPred(_, p) | PredObj(p, _) | PredOnly(p), RdfType)
                if self.rules.vocabulary().has_only_property_declarations() =>
            {
                self.with_sub_properties(s.cloned(), p.clone(), o.cloned())
            }
            (AllBound(s, _, o), RdfType) => self.check_type(s.clone(), o.clone()),
            (SubjPred(s, _), RdfType) => self.types_of(s.clone()),
            (PredObj(_, o), RdfType) => self.instances_of(o.clone()),
            (PredOnly(_), RdfType) => self.all_typings(),
            (_, SubClassOrSubProperty(_)) => self.source.find(s, p, o),
            (AllWild | SubjOnly(_) | ObjOnly(_) | SubjObj(..), Wildcard) => {
                self.any_predicate(s.cloned(), o.cloned())
            }
            (
                AllBound(_, p, _) | SubjPred(_, p) | PredObj(p, _) | PredOnly(p),
                Ordinary,
            ) => self.with_sub_properties(s.cloned(), p.clone(), o.cloned()),
            (AllWild | SubjOnly(_) | ObjOnly(_) | SubjObj(..), RdfType | Ordinary)
            | (AllBound(..) | SubjPred(..) | PredObj(..) | PredOnly(_), Wildcard) => {
                unreachable!("predicate kind does not agree with pattern shape")
            }
        }
    }
}

impl<S, V, M> RdfsSource<S, V, M>
where
    M: TermMapper,
    S: Source<Term = M::Term, Tuple = M::Tuple>,
    V: Vocabulary<Term = M::Term>,
{
    /// `(s, rdf:type, o)`
    fn check_type(&self, s: S::Term, o: S::Term) -> TupleSource<'_, Self> {
        deferred(move || {
            let type_ = &self.rules.rdfs().type_;
            if let Some(asserted) = self.source.find(Some(&s), Some(type_), Some(&o)).next() {
                return asserted.map(|t| vec![t]);
            }
            let mut types = HashSet::new();
            let mut found = self.direct_types(&s, Some(&o), &mut types)?;
            if !found && self.rules.vocabulary().has_class_declarations() {
                let voc = self.rules.vocabulary();
                found = types.iter().any(|c| voc.super_classes(c).contains(&o));
            }
            Ok(if found {
                vec![self.mapper.make_tuple(s, type_.clone(), o)]
            } else {
                vec![]
            })
        })
    }

    /// `(s, rdf:type, ?)`
    fn types_of(&self, s: S::Term) -> TupleSource<'_, Self> {
        deferred(move || {
            let voc = self.rules.vocabulary();
            let mut types = HashSet::new();
            self.direct_types(&s, None, &mut types)?;
            if voc.has_class_declarations() {
                let supers: Vec<_> = types
                    .iter()
                    .flat_map(|c| voc.super_classes(c))
                    .cloned()
                    .collect();
                types.extend(supers);
            }
            let type_ = &self.rules.rdfs().type_;
            Ok(types
                .into_iter()
                .map(|c| self.mapper.make_tuple(s.clone(), type_.clone(), c))
                .collect())
        })
    }

    /// `(?, rdf:type, o)`
    fn instances_of(&self, o: S::Term) -> TupleSource<'_, Self> {
        let voc = self.rules.vocabulary();
        let type_ = &self.rules.rdfs().type_;
        let domains = voc.has_domain_declarations();
        let ranges = voc.has_range_declarations();
        let classes: Vec<_> = voc.sub_classes_inclusive(&o).cloned().collect();
        Box::new(
            classes
                .into_iter()
                .flat_map(move |c| {
                    let by_domain = domains
                        .then(|| voc.properties_by_domain(&c))
                        .into_iter()
                        .flatten()
                        .flat_map(move |q| {
                            self.source
                                .find(None, Some(q), None)
                                .map_ok(move |t| self.mapper.subject(&t).clone())
                        });
                    let by_range = ranges
                        .then(|| voc.properties_by_range(&c))
                        .into_iter()
                        .flatten()
                        .flat_map(move |q| {
                            self.source
                                .find(None, Some(q), None)
                                .map_ok(move |t| self.mapper.object(&t).clone())
                        });
                    let asserted = voc.sub_properties_inclusive(type_).flat_map(move |q| {
                        self.source
                            .find(None, Some(q), Some(&c))
                            .map_ok(move |t| self.mapper.subject(&t).clone())
                    });
                    asserted.chain(by_domain).chain(by_range)
                })
                .map_ok(move |x| self.mapper.make_tuple(x, type_.clone(), o.clone()))
                .dedup_ok(),
        )
    }

    /// `(?, rdf:type, ?)`
    fn all_typings(&self) -> TupleSource<'_, Self> {
        let voc = self.rules.vocabulary();
        let type_ = &self.rules.rdfs().type_;
        if !voc.has_domain_declarations() && !voc.has_range_declarations() {
            log::trace!("no domain or range declared, only scanning typing properties");
            Box::new(
                voc.sub_properties_inclusive(type_)
                    .flat_map(move |q| self.source.find(None, Some(q), None))
                    .flat_map_ok(move |t| {
                        let fact = if self.mapper.predicate(&t) == type_ {
                            t
                        } else {
                            let [s, _, c] = self.mapper.spo(&t);
                            self.mapper.make_tuple(s, type_.clone(), c)
                        };
                        self.with_superclasses(fact)
                    })
                    .dedup_ok(),
            )
        } else {
            Box::new(
                self.source
                    .find(None, None, None)
                    .flat_map_ok(move |t| {
                        if self.mapper.predicate(&t) == type_ {
                            self.with_superclasses(t)
                        } else {
                            self.with_consequences(t)
                        }
                    })
                    .filter_ok(move |t| self.mapper.predicate(t) == type_)
                    .dedup_ok(),
            )
        }
    }

    /// `(s?, ?, o?)`
    fn any_predicate(&self, s: Option<S::Term>, o: Option<S::Term>) -> TupleSource<'_, Self> {
        let forward = self.source.find(s.as_ref(), None, None);
        let backward = s
            .as_ref()
            .filter(|_| self.rules.vocabulary().has_range_declarations())
            .map(|s| self.source.find(None, None, Some(s)));
        Box::new(
            forward
                .chain(backward.into_iter().flatten())
                .flat_map_ok(move |t| self.with_consequences(t))
                .filter_ok(move |t| {
                    matches(s.as_ref(), self.mapper.subject(t))
                        && matches(o.as_ref(), self.mapper.object(t))
                })
                .dedup_ok(),
        )
    }

    /// `(s?, p, o?)` where `p` is neither `rdf:type` nor a hierarchy predicate
    fn with_sub_properties(
        &self,
        s: Option<S::Term>,
        p: S::Term,
        o: Option<S::Term>,
    ) -> TupleSource<'_, Self> {
        let props: Vec<_> = self
            .rules
            .vocabulary()
            .sub_properties_inclusive(&p)
            .cloned()
            .collect();
        Box::new(
            props
                .into_iter()
                .flat_map(move |q| {
                    let rewrite = (q != p).then(|| p.clone());
                    self.source
                        .find(s.as_ref(), Some(&q), o.as_ref())
                        .map_ok(move |t| match &rewrite {
                            None => t,
                            Some(p) => {
                                let [s, _, o] = self.mapper.spo(&t);
                                self.mapper.make_tuple(s, p.clone(), o)
                            }
                        })
                })
                .dedup_ok(),
        )
    }

    /// Accumulate in `types` the classes that `s` belongs to,
    /// according to the domain and range of the properties it uses,
    /// and to its `rdf:type`s (asserted, or through a sub-property of `rdf:type`).
    ///
    /// Stops early and returns `true` as soon as `target` is found.
    fn direct_types(
        &self,
        s: &S::Term,
        target: Option<&S::Term>,
        types: &mut HashSet<S::Term>,
    ) -> Result<bool, S::Error> {
        let found = |types: &HashSet<S::Term>| target.map_or(false, |c| types.contains(c));
        let voc = self.rules.vocabulary();
        if voc.has_range_declarations() {
            for t in self.source.find(None, None, Some(s)) {
                types.extend(voc.range(self.mapper.predicate(&t?)).iter().cloned());
            }
            if found(types) {
                return Ok(true);
            }
        }
        if voc.has_domain_declarations() {
            for t in self.source.find(Some(s), None, None) {
                types.extend(voc.domain(self.mapper.predicate(&t?)).iter().cloned());
            }
            if found(types) {
                return Ok(true);
            }
        }
        let type_ = &self.rules.rdfs().type_;
        for q in voc.sub_properties_inclusive(type_) {
            for t in self.source.find(Some(s), Some(q), None) {
                types.insert(self.mapper.object(&t?).clone());
            }
        }
        Ok(found(types))
    }

    /// `fact`, followed by all its direct consequences.
    fn with_consequences(&self, fact: M::Tuple) -> Vec<M::Tuple> {
        let [s, p, o] = self.mapper.spo(&fact);
        let mut ret = vec![fact];
        self.rules
            .apply_rules(&s, &p, &o, |s, p, o| ret.push(self.mapper.make_tuple(s, p, o)));
        ret
    }

    /// `fact` (an `rdf:type` fact), followed by the same fact for all the superclasses of its object.
    fn with_superclasses(&self, fact: M::Tuple) -> Vec<M::Tuple> {
        let [s, _, c] = self.mapper.spo(&fact);
        let mut ret = vec![fact];
        self.rules
            .apply_subclass_rule(&s, &c, |s, p, o| ret.push(self.mapper.make_tuple(s, p, o)));
        ret
    }
}

/// Postpone the computation of a set of results until the first call to `next`.
fn deferred<'a, T, E, F>(f: F) -> Box<dyn Iterator<Item = Result<T, E>> + 'a>
where
    T: 'a,
    E: 'a,
    F: FnOnce() -> Result<Vec<T>, E> + 'a,
{
    Box::new(once_with(f).flat_map(|res| {
        let (items, err) = match res {
            Ok(items) => (items, None),
            Err(err) => (vec![], Some(err)),
        };
        items.into_iter().map(Ok).chain(err.map(Err))
    }))
}
