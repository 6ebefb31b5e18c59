use super::error::{DirectoryError, Result};
use super::memory::StudentStore;
use super::types::{Student, StudentId, StudentPatch};

use std::sync::Arc;

/// Exclusive bounds on the ids the viewing endpoint (`get_by_id`) will serve.
///
/// Other operations accept any positive id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRange {
    gt: u64,
    lt: u64,
}

impl ViewRange {
    /// Returns `None` when the range would be empty.
    pub fn new(gt: u64, lt: u64) -> Option<Self> {
        (gt.saturating_add(1) < lt).then_some(Self { gt, lt })
    }

    pub fn gt(&self) -> u64 {
        self.gt
    }

    pub fn lt(&self) -> u64 {
        self.lt
    }

    pub fn contains(&self, id: StudentId) -> bool {
        id.get() > self.gt && id.get() < self.lt
    }
}

impl Default for ViewRange {
    fn default() -> Self {
        Self { gt: 0, lt: 3 }
    }
}

/// The five directory operations over a shared `StudentStore`.
#[derive(Clone)]
pub struct DirectoryService {
    store: Arc<dyn StudentStore>,
    view_range: ViewRange,
}

impl DirectoryService {
    pub fn new(store: Arc<dyn StudentStore>, view_range: ViewRange) -> Self {
        Self { store, view_range }
    }

    pub fn student_count(&self) -> usize {
        self.store.len()
    }

    /// Looks up a record for the viewing endpoint. Ids outside the view range are rejected
    /// before the store is consulted.
    pub fn get_by_id(&self, id: StudentId) -> Result<Student> {
        if !self.view_range.contains(id) {
            return Err(DirectoryError::OutOfRange {
                id: id.get(),
                gt: self.view_range.gt,
                lt: self.view_range.lt,
            });
        }

        self.store.get(id).ok_or(DirectoryError::NotFound(id))
    }

    /// First record (in ascending id order) whose name equals `name` exactly.
    pub fn get_by_name(&self, name: &str) -> Result<Student> {
        self.store
            .scan()
            .into_iter()
            .find(|(_, student)| student.name() == name)
            .map(|(id, student)| {
                tracing::debug!("Name {:?} matched student {}", name, id);
                student
            })
            .ok_or_else(|| DirectoryError::NameNotFound(name.to_string()))
    }

    pub fn create(&self, id: StudentId, student: Student) -> Result<Student> {
        let created = self.store.insert(id, student)?;
        tracing::info!("Created student {}", id);
        Ok(created)
    }

    /// Applies the fields set in `patch`; fields it leaves unset keep their stored value.
    pub fn update(&self, id: StudentId, patch: &StudentPatch) -> Result<Student> {
        let updated = self.store.update(id, patch)?;
        tracing::info!("Updated student {}", id);
        Ok(updated)
    }

    pub fn delete(&self, id: StudentId) -> Result<Student> {
        let removed = self.store.delete(id)?;
        tracing::info!("Deleted student {}", id);
        Ok(removed)
    }
}
