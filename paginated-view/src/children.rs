use alloc::vec;
use alloc::vec::Vec;

/// Page content as handed over by a caller: nothing, a single page, or a list.
///
/// A view normalizes this into a fixed, index-addressed sequence once, at construction (or when
/// the pages are replaced).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children<T> {
    None,
    One(T),
    Many(Vec<T>),
}

impl<T> Children<T> {
    pub fn one(page: T) -> Self {
        Self::One(page)
    }

    pub fn into_pages(self) -> Vec<T> {
        match self {
            Self::None => Vec::new(),
            Self::One(page) => vec![page],
            Self::Many(pages) => pages,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::One(_) => 1,
            Self::Many(pages) => pages.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Vec<T>> for Children<T> {
    fn from(pages: Vec<T>) -> Self {
        Self::Many(pages)
    }
}

impl<T> From<Option<T>> for Children<T> {
    fn from(page: Option<T>) -> Self {
        match page {
            Some(page) => Self::One(page),
            None => Self::None,
        }
    }
}

impl<T> FromIterator<T> for Children<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Many(iter.into_iter().collect())
    }
}
