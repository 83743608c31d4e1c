//! The roster: an id-keyed store of students with a monotonic id counter.

use crate::domain::StudentId;
use crate::error::{RosterError, RosterResult};
use crate::models::{NewStudent, Student, StudentDetails, StudentUpdate};
use std::collections::BTreeMap;
use tracing::{error, info, warn};

/// The in-memory collection of all known students, keyed by id.
///
/// Keys always equal the id of the mapped student. `next_id` is strictly
/// monotonic: it is greater than every id ever issued, and deleting a
/// student never frees its id for reuse.
#[derive(Debug)]
pub struct Roster {
    students: BTreeMap<StudentId, Student>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create an empty roster. The first issued id is 1.
    pub fn new() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Validate and admit a new student, assigning the next free id.
    ///
    /// Nothing is stored and the id counter does not move if validation
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns the underlying `ValidationError` for the first field that
    /// fails.
    pub fn add_student(&mut self, new: NewStudent) -> RosterResult<StudentId> {
        let id = StudentId::new(self.next_id)?;
        let student =
            Student::new(id, new.name, new.age, new.grade, new.contact).map_err(|e| {
                error!("Error adding student: {}", e);
                e
            })?;

        info!("Added new student: {} with ID: {}", student.name(), id);
        self.students.insert(id, student);
        self.next_id += 1;
        Ok(id)
    }

    /// Remove a student, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::NotFound` if no student has the given id.
    pub fn delete_student(&mut self, id: StudentId) -> RosterResult<Student> {
        match self.students.remove(&id) {
            Some(student) => {
                info!("Deleted student: {} with ID: {}", student.name(), id);
                Ok(student)
            }
            None => {
                warn!("Student not found with ID: {}", id);
                Err(RosterError::NotFound(id))
            }
        }
    }

    /// Apply an update to a student, all-or-nothing.
    ///
    /// # Errors
    ///
    /// `RosterError::NotFound` for an unknown id; otherwise the underlying
    /// `ValidationError`, in which case the student's prior state is
    /// unchanged.
    pub fn update_student(
        &mut self,
        id: StudentId,
        update: StudentUpdate,
    ) -> RosterResult<StudentDetails> {
        let student = self.students.get_mut(&id).ok_or_else(|| {
            warn!("Student not found with ID: {}", id);
            RosterError::NotFound(id)
        })?;

        student.apply_update(update).map_err(|e| {
            error!("Error updating details: {}", e);
            e
        })?;
        info!("Updated details for student ID: {}", id);
        Ok(student.details())
    }

    /// Admit a student at an explicit id, as the import path does.
    ///
    /// An existing student at that id is replaced. When the id is at or
    /// past the counter, the counter advances past it so later additions
    /// keep issuing fresh ids.
    pub fn admit_with_id(&mut self, student: Student) {
        let id = student.id();
        self.students.insert(id, student);
        if id.as_u32() >= self.next_id {
            self.next_id = id.as_u32() + 1;
        }
    }

    /// Look up a student by id.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Iterate all students in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    /// Number of students in the roster.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The id the next admitted student would receive.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Average age across the roster, or `None` when empty.
    pub fn average_age(&self) -> Option<f64> {
        if self.students.is_empty() {
            return None;
        }
        let total: u64 = self.students.values().map(|s| u64::from(s.age())).sum();
        Some(total as f64 / self.students.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;

    fn new_student(name: &str, age: u32, grade: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            age,
            grade: grade.to_string(),
            contact: None,
        }
    }

    #[test]
    fn test_add_student_issues_sequential_ids() {
        let mut roster = Roster::new();
        let a = roster.add_student(new_student("John Doe", 18, "Grade 12")).unwrap();
        let b = roster.add_student(new_student("Jane Smith", 17, "Grade 11")).unwrap();
        let c = roster.add_student(new_student("Bob Johnson", 16, "Grade 10")).unwrap();
        assert_eq!(a.as_u32(), 1);
        assert_eq!(b.as_u32(), 2);
        assert_eq!(c.as_u32(), 3);
    }

    #[test]
    fn test_add_student_failure_stores_nothing() {
        let mut roster = Roster::new();
        let result = roster.add_student(new_student("J0hn", 18, "Grade 12"));
        assert!(result.is_err());
        assert!(roster.is_empty());
        assert_eq!(roster.next_id(), 1);
    }

    #[test]
    fn test_deleted_id_is_not_reused() {
        let mut roster = Roster::new();
        let a = roster.add_student(new_student("John Doe", 18, "Grade 12")).unwrap();
        roster.delete_student(a).unwrap();
        let b = roster.add_student(new_student("Jane Smith", 17, "Grade 11")).unwrap();
        assert_eq!(b.as_u32(), 2);
    }

    #[test]
    fn test_delete_unknown_is_not_found() {
        let mut roster = Roster::new();
        let id = StudentId::new(9).unwrap();
        assert!(matches!(
            roster.delete_student(id),
            Err(RosterError::NotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn test_update_student() {
        let mut roster = Roster::new();
        let id = roster.add_student(new_student("John Doe", 18, "Grade 12")).unwrap();
        let details = roster
            .update_student(
                id,
                StudentUpdate {
                    name: Some("John Doe".to_string()),
                    age: Some(19),
                    grade: Some("Grade 12".to_string()),
                    contact: Some(Contact::new("12345678901", "john.doe@example.com").unwrap()),
                },
            )
            .unwrap();
        assert_eq!(details.age, 19);
        assert_eq!(details.contact.unwrap().phone, "12345678901");
    }

    #[test]
    fn test_admit_with_id_advances_counter() {
        let mut roster = Roster::new();
        let id = StudentId::new(7).unwrap();
        let student = Student::new(id, "Jane Smith", 17, "Grade 11", None).unwrap();
        roster.admit_with_id(student);
        assert_eq!(roster.next_id(), 8);

        let next = roster.add_student(new_student("Bob Johnson", 16, "Grade 10")).unwrap();
        assert_eq!(next.as_u32(), 8);
    }

    #[test]
    fn test_admit_with_lower_id_keeps_counter() {
        let mut roster = Roster::new();
        roster.add_student(new_student("John Doe", 18, "Grade 12")).unwrap();
        roster.add_student(new_student("Jane Smith", 17, "Grade 11")).unwrap();

        let id = StudentId::new(1).unwrap();
        let replacement = Student::new(id, "Johnny Doe", 19, "Grade 12", None).unwrap();
        roster.admit_with_id(replacement);
        assert_eq!(roster.next_id(), 3);
        assert_eq!(roster.student(id).unwrap().name(), "Johnny Doe");
    }

    #[test]
    fn test_average_age() {
        let mut roster = Roster::new();
        assert!(roster.average_age().is_none());
        roster.add_student(new_student("John Doe", 18, "Grade 12")).unwrap();
        roster.add_student(new_student("Jane Smith", 17, "Grade 11")).unwrap();
        assert_eq!(roster.average_age(), Some(17.5));
    }

    #[test]
    fn test_iter_in_id_order() {
        let mut roster = Roster::new();
        let id = StudentId::new(5).unwrap();
        roster.admit_with_id(Student::new(id, "Eve Adams", 15, "Grade 9", None).unwrap());
        roster.add_student(new_student("Frank Moore", 16, "Grade 10")).unwrap();

        let ids: Vec<u32> = roster.iter().map(|s| s.id().as_u32()).collect();
        assert_eq!(ids, vec![5, 6]);
    }
}
