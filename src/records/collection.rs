use std::{io::Read, ops::Index, path::Path, slice};

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    error::Result,
    records::{load_records, read_records},
};

/// Records of one table, in source row order. Read-only once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: DeserializeOwned> Collection<T> {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            items: load_records(path.as_ref())?,
        })
    }

    /// Parse from any reader (file, in-memory, decompressed stream, etc.)
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self {
            items: read_records(reader)?,
        })
    }
}

impl<T> Collection<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Index<usize> for Collection<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
