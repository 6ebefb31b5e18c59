use super::error::{DirectoryError, Result};
use super::types::{Student, StudentId, StudentPatch, ValidationError};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Storage interface used by `DirectoryService`.
///
/// Every method is a single atomic step against the underlying map: implementations must
/// not let a concurrent writer slip in between the existence check and the write of
/// `insert`, or between the read and the write of `update`.
pub trait StudentStore: Send + Sync {
    /// Returns a copy of the record stored under `id`.
    fn get(&self, id: StudentId) -> Option<Student>;

    /// Stores `student` under `id` unless the id is already taken.
    ///
    /// # Errors
    /// `Conflict` if `id` is present; the stored record is left untouched.
    fn insert(&self, id: StudentId, student: Student) -> Result<Student>;

    /// Merges `patch` into the record stored under `id` and returns the new value.
    ///
    /// # Errors
    /// `NotFound` if `id` is absent, `Invalid` if the merged record fails validation.
    fn update(&self, id: StudentId, patch: &StudentPatch) -> Result<Student>;

    /// Removes and returns the record stored under `id`.
    fn delete(&self, id: StudentId) -> Result<Student>;

    /// All records in ascending id order.
    fn scan(&self) -> Vec<(StudentId, Student)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process `StudentStore`. State lives as long as the store; nothing is persisted.
#[derive(Default)]
pub struct MemoryStore {
    data: DashMap<StudentId, Student>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `students`. Later duplicates of an id replace earlier ones.
    pub fn with_students(students: impl IntoIterator<Item = (StudentId, Student)>) -> Self {
        let data = DashMap::new();
        for (id, student) in students {
            data.insert(id, student);
        }
        Self { data }
    }
}

impl StudentStore for MemoryStore {
    fn get(&self, id: StudentId) -> Option<Student> {
        self.data.get(&id).map(|entry| entry.value().clone())
    }

    fn insert(&self, id: StudentId, student: Student) -> Result<Student> {
        match self.data.entry(id) {
            Entry::Occupied(_) => Err(DirectoryError::Conflict(id)),
            Entry::Vacant(slot) => {
                slot.insert(student.clone());
                Ok(student)
            }
        }
    }

    fn update(&self, id: StudentId, patch: &StudentPatch) -> Result<Student> {
        let mut entry = self
            .data
            .get_mut(&id)
            .ok_or(DirectoryError::NotFound(id))?;

        let merged = entry.apply(patch)?;
        *entry = merged.clone();
        Ok(merged)
    }

    fn delete(&self, id: StudentId) -> Result<Student> {
        self.data
            .remove(&id)
            .map(|(_, student)| student)
            .ok_or(DirectoryError::NotFound(id))
    }

    fn scan(&self) -> Vec<(StudentId, Student)> {
        let mut entries: Vec<(StudentId, Student)> = self
            .data
            .iter()
            .map(|entry| (*entry.key(), entry.value().clone()))
            .collect();
        entries.sort_by_key(|(id, _)| *id);
        entries
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

/// The record every fresh directory starts with.
pub fn seed_records() -> std::result::Result<Vec<(StudentId, Student)>, ValidationError> {
    Ok(vec![(StudentId::new(1)?, Student::new("jj", 17, "1st")?)])
}
