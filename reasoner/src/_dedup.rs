use std::collections::HashSet;
use std::hash::Hash;

pub trait ResultIteratorDedup<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Drop the `Ok` items already yielded; `Err` items are always passed through.
    fn dedup_ok(self) -> DedupOk<Self, T> {
        DedupOk {
            inner: self,
            seen: HashSet::new(),
        }
    }
}
impl<T, E, I: Iterator<Item = Result<T, E>>> ResultIteratorDedup<T, E> for I {}

pub struct DedupOk<I, T> {
    inner: I,
    seen: HashSet<T>,
}

impl<T, E, I> Iterator for DedupOk<I, T>
where
    T: Clone + Eq + Hash,
    I: Iterator<Item = Result<T, E>>,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(t) => {
                    if self.seen.insert(t.clone()) {
                        return Some(Ok(t));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
