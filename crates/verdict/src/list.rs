use crate::outcome::Outcome;

/// An outcome carrying a sequence of items.
pub type ListOutcome<T> = Outcome<Vec<T>>;

impl<T> Outcome<Vec<T>> {
    /// Number of items, 0 when there is no list.
    pub fn count(&self) -> usize {
        self.data().map_or(0, Vec::len)
    }

    pub fn is_list_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn items(&self) -> &[T] {
        self.data().map(Vec::as_slice).unwrap_or(&[])
    }
}
