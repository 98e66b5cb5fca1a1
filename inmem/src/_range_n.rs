use std::collections::btree_set::Range;
use std::collections::BTreeSet;

use crate::index::Index;

pub trait RangeN<I> {
    fn range1(&self, k1: I) -> Range<'_, [I; 3]>;
    fn range2(&self, k1: I, k2: I) -> Range<'_, [I; 3]>;
}

impl<I: Index> RangeN<I> for BTreeSet<[I; 3]> {
    fn range1(&self, k1: I) -> Range<'_, [I; 3]> {
        self.range([k1, I::ZERO, I::ZERO]..=[k1, I::MAX, I::MAX])
    }

    fn range2(&self, k1: I, k2: I) -> Range<'_, [I; 3]> {
        self.range([k1, k2, I::ZERO]..=[k1, k2, I::MAX])
    }
}
