use async_trait::async_trait;
use interview_core::model::{AnsweredQuestion, CategoryName, CategoryPool, PoolError};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Errors surfaced by workspace store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Workspace store contract: the selected categories, their remaining
/// questions and the answers recorded so far.
///
/// Each call is one atomic action; callers issue them sequentially.
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    /// Snapshot of the selected category pools.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn selected_categories(&self) -> Result<CategoryPool, StorageError>;

    /// Selected category names, in selection order.
    ///
    /// A category stays listed until `remove_category` drops it, even if its
    /// pool has run dry in the meantime.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn selected_category_list(&self) -> Result<Vec<CategoryName>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn remaining_questions(&self) -> Result<u32, StorageError>;

    /// Record `question` as answered and remove the block at `block_index`
    /// from the pool of `category`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Pool` if the category or index is unknown.
    async fn question_answered(
        &self,
        question: AnsweredQuestion,
        block_index: usize,
        category: &CategoryName,
    ) -> Result<(), StorageError>;

    /// Drop a category from the selection. Returns `false` if it was not selected.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn remove_category(&self, category: &CategoryName) -> Result<bool, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn update_remaining_questions(&self, value: u32) -> Result<(), StorageError>;

    /// Replace the selection with `pool`, resetting the counter to its total
    /// question count and forgetting previous answers.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn select_categories(&self, pool: CategoryPool) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn answered_questions(&self) -> Result<Vec<AnsweredQuestion>, StorageError>;

    /// Forget the selection, counter and answers.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Default)]
struct WorkspaceData {
    pool: CategoryPool,
    list: Vec<CategoryName>,
    remaining: u32,
    answered: Vec<AnsweredQuestion>,
}

/// Process-local workspace; nothing survives a restart.
#[derive(Clone, Default)]
pub struct InMemoryWorkspace {
    data: Arc<Mutex<WorkspaceData>>,
}

impl InMemoryWorkspace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, WorkspaceData>, StorageError> {
        self.data
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl WorkspaceStore for InMemoryWorkspace {
    async fn selected_categories(&self) -> Result<CategoryPool, StorageError> {
        Ok(self.lock()?.pool.clone())
    }

    async fn selected_category_list(&self) -> Result<Vec<CategoryName>, StorageError> {
        Ok(self.lock()?.list.clone())
    }

    async fn remaining_questions(&self) -> Result<u32, StorageError> {
        Ok(self.lock()?.remaining)
    }

    async fn question_answered(
        &self,
        question: AnsweredQuestion,
        block_index: usize,
        category: &CategoryName,
    ) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        guard.pool.take(category, block_index)?;
        guard.answered.push(question);
        Ok(())
    }

    async fn remove_category(&self, category: &CategoryName) -> Result<bool, StorageError> {
        let mut guard = self.lock()?;
        let before = guard.list.len();
        guard.list.retain(|name| name != category);
        let removed = guard.list.len() != before;
        guard.pool.remove_category(category);
        if removed {
            tracing::debug!(%category, "category removed from selection");
        }
        Ok(removed)
    }

    async fn update_remaining_questions(&self, value: u32) -> Result<(), StorageError> {
        self.lock()?.remaining = value;
        Ok(())
    }

    async fn select_categories(&self, pool: CategoryPool) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        guard.list = pool.non_empty_categories();
        guard.remaining = u32::try_from(pool.total_questions()).unwrap_or(u32::MAX);
        guard.pool = pool;
        guard.answered.clear();
        Ok(())
    }

    async fn answered_questions(&self) -> Result<Vec<AnsweredQuestion>, StorageError> {
        Ok(self.lock()?.answered.clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.lock()? = WorkspaceData::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::model::QuestionBlock;
    use interview_core::time::fixed_now;

    fn name(value: &str) -> CategoryName {
        CategoryName::new(value).unwrap()
    }

    fn block(question: &str) -> QuestionBlock {
        QuestionBlock::new(question, ["answer"]).unwrap()
    }

    fn pool() -> CategoryPool {
        let mut pool = CategoryPool::new();
        pool.insert(name("JS"), vec![block("Q1"), block("Q2")]);
        pool.insert(name("Empty"), Vec::new());
        pool.insert(name("CSS"), vec![block("Q3")]);
        pool
    }

    #[tokio::test]
    async fn select_sets_list_and_counter() {
        let store = InMemoryWorkspace::new();
        store.select_categories(pool()).await.unwrap();

        assert_eq!(
            store.selected_category_list().await.unwrap(),
            vec![name("JS"), name("CSS")]
        );
        assert_eq!(store.remaining_questions().await.unwrap(), 3);
        assert!(store.answered_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn question_answered_takes_block_and_records_answer() {
        let store = InMemoryWorkspace::new();
        store.select_categories(pool()).await.unwrap();

        let answered = AnsweredQuestion::new(name("JS"), block("Q2"), "mine", fixed_now());
        store
            .question_answered(answered.clone(), 1, &name("JS"))
            .await
            .unwrap();

        let categories = store.selected_categories().await.unwrap();
        assert_eq!(categories.get(&name("JS")).unwrap(), [block("Q1")]);
        assert_eq!(store.answered_questions().await.unwrap(), vec![answered]);
        // The counter is owned by the caller.
        assert_eq!(store.remaining_questions().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn question_answered_with_stale_index_fails() {
        let store = InMemoryWorkspace::new();
        store.select_categories(pool()).await.unwrap();

        let answered = AnsweredQuestion::new(name("CSS"), block("Q3"), "", fixed_now());
        let err = store
            .question_answered(answered, 5, &name("CSS"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Pool(PoolError::IndexOutOfRange { .. })));
        assert!(store.answered_questions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_category_reports_first_removal_only() {
        let store = InMemoryWorkspace::new();
        store.select_categories(pool()).await.unwrap();

        assert!(store.remove_category(&name("CSS")).await.unwrap());
        assert!(!store.remove_category(&name("CSS")).await.unwrap());
        assert_eq!(store.selected_category_list().await.unwrap(), vec![name("JS")]);
        assert!(!store.selected_categories().await.unwrap().contains(&name("CSS")));
    }

    #[tokio::test]
    async fn clear_forgets_everything() {
        let store = InMemoryWorkspace::new();
        store.select_categories(pool()).await.unwrap();
        store.update_remaining_questions(1).await.unwrap();
        store.clear().await.unwrap();

        assert!(store.selected_category_list().await.unwrap().is_empty());
        assert_eq!(store.remaining_questions().await.unwrap(), 0);
        assert!(store.selected_categories().await.unwrap().is_empty());
    }
}
