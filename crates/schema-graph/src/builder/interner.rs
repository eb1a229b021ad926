use std::{borrow::Borrow, marker::PhantomData};

/// Deduplicating arena used while building the graph. Ids are stable
/// insertion indices.
pub(crate) struct Interner<T, Id>(indexmap::IndexSet<T>, PhantomData<Id>);

impl<T, Id> Default for Interner<T, Id> {
    fn default() -> Self {
        Self(Default::default(), PhantomData)
    }
}

impl<T: std::hash::Hash + Eq, Id: Copy + From<usize> + Into<usize>> Interner<T, Id> {
    pub(crate) fn insert(&mut self, value: T) -> Id {
        self.0.insert_full(value).0.into()
    }

    pub(crate) fn get_or_new<Q>(&mut self, value: &Q) -> Id
    where
        T: Borrow<Q> + for<'a> From<&'a Q>,
        Q: ?Sized + Eq + std::hash::Hash,
    {
        self.0
            .get_full(value)
            .map(|(id, _)| id.into())
            .unwrap_or_else(|| self.insert(value.into()))
    }
}

impl<T, Id: Into<usize>> std::ops::Index<Id> for Interner<T, Id> {
    type Output = T;

    fn index(&self, index: Id) -> &T {
        &self.0[index.into()]
    }
}

impl<T, Id> From<Interner<T, Id>> for Vec<T> {
    fn from(interner: Interner<T, Id>) -> Self {
        interner.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_deduplicates() {
        let mut interner: Interner<String, usize> = Interner::default();
        let a = interner.get_or_new("a");
        let b = interner.get_or_new("b");
        let a_again = interner.get_or_new("a");

        assert_eq!(a, a_again);
        assert_ne!(a, b);
        assert_eq!(Vec::from(interner), vec!["a".to_owned(), "b".to_owned()]);
    }
}
