use thiserror::Error;

use crate::model::{CategoryName, QuestionBlock};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("unknown category: {0}")]
    UnknownCategory(CategoryName),

    #[error("block index {index} out of range for {category} ({len} left)")]
    IndexOutOfRange {
        category: CategoryName,
        index: usize,
        len: usize,
    },
}

/// Questions grouped by category, in the order categories were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPool {
    entries: Vec<(CategoryName, Vec<QuestionBlock>)>,
}

impl CategoryPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the blocks of a category. A replaced category keeps its position.
    pub fn insert(&mut self, name: CategoryName, blocks: Vec<QuestionBlock>) {
        match self.position(&name) {
            Some(idx) => self.entries[idx].1 = blocks,
            None => self.entries.push((name, blocks)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &CategoryName) -> Option<&[QuestionBlock]> {
        self.position(name).map(|idx| self.entries[idx].1.as_slice())
    }

    #[must_use]
    pub fn contains(&self, name: &CategoryName) -> bool {
        self.position(name).is_some()
    }

    /// Number of blocks left in a category; unknown categories count as empty.
    #[must_use]
    pub fn len_of(&self, name: &CategoryName) -> usize {
        self.get(name).map_or(0, <[QuestionBlock]>::len)
    }

    /// Remove and return the block at `index`.
    ///
    /// Selection and removal share the same bounds check, so a block can never
    /// be taken twice.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::UnknownCategory` if the category is missing and
    /// `PoolError::IndexOutOfRange` if the index is past the end.
    pub fn take(&mut self, name: &CategoryName, index: usize) -> Result<QuestionBlock, PoolError> {
        let idx = self
            .position(name)
            .ok_or_else(|| PoolError::UnknownCategory(name.clone()))?;
        let blocks = &mut self.entries[idx].1;
        if index >= blocks.len() {
            return Err(PoolError::IndexOutOfRange {
                category: name.clone(),
                index,
                len: blocks.len(),
            });
        }
        Ok(blocks.remove(index))
    }

    /// Drop a category and its remaining blocks.
    pub fn remove_category(&mut self, name: &CategoryName) -> Option<Vec<QuestionBlock>> {
        let idx = self.position(name)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &CategoryName> {
        self.entries.iter().map(|(name, _)| name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CategoryName, &[QuestionBlock])> {
        self.entries
            .iter()
            .map(|(name, blocks)| (name, blocks.as_slice()))
    }

    /// Categories that still have at least one block, in insertion order.
    #[must_use]
    pub fn non_empty_categories(&self) -> Vec<CategoryName> {
        self.entries
            .iter()
            .filter(|(_, blocks)| !blocks.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.entries.iter().map(|(_, blocks)| blocks.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_questions() == 0
    }

    fn position(&self, name: &CategoryName) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == name)
    }
}
