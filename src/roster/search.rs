//! Roster search: exact id, or case-insensitive substring on name/grade.

use crate::domain::StudentId;
use crate::models::Student;
use crate::roster::store::Roster;

/// What to match students against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriterion {
    /// Exact id match.
    Id(StudentId),

    /// Case-insensitive substring match on the name.
    Name(String),

    /// Case-insensitive substring match on the grade.
    Grade(String),
}

impl Roster {
    /// Find students matching the criterion, in id order.
    ///
    /// A linear scan; the roster is small and in memory.
    pub fn find(&self, criterion: &SearchCriterion) -> Vec<&Student> {
        match criterion {
            SearchCriterion::Id(id) => self.student(*id).into_iter().collect(),
            SearchCriterion::Name(query) => {
                let query = query.to_lowercase();
                self.iter()
                    .filter(|s| s.name().to_lowercase().contains(&query))
                    .collect()
            }
            SearchCriterion::Grade(query) => {
                let query = query.to_lowercase();
                self.iter()
                    .filter(|s| s.grade().to_lowercase().contains(&query))
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewStudent;

    fn roster() -> Roster {
        let mut roster = Roster::new();
        for (name, age, grade) in [
            ("John Doe", 18, "Grade 12"),
            ("Jane Smith", 17, "Grade 11"),
            ("Bob Johnson", 16, "Grade 10"),
        ] {
            roster
                .add_student(NewStudent {
                    name: name.to_string(),
                    age,
                    grade: grade.to_string(),
                    contact: None,
                })
                .unwrap();
        }
        roster
    }

    #[test]
    fn test_find_by_name_is_case_insensitive_substring() {
        let roster = roster();
        let matches = roster.find(&SearchCriterion::Name("jane".to_string()));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name(), "Jane Smith");
    }

    #[test]
    fn test_find_by_name_no_match() {
        let roster = roster();
        let matches = roster.find(&SearchCriterion::Name("Jane Doe".to_string()));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_find_by_name_substring_spans_words() {
        let roster = roster();
        // "john" appears in both "John Doe" and "Bob Johnson"
        let matches = roster.find(&SearchCriterion::Name("john".to_string()));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn test_find_by_id_is_exact() {
        let roster = roster();
        let matches = roster.find(&SearchCriterion::Id(StudentId::new(2).unwrap()));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name(), "Jane Smith");

        let matches = roster.find(&SearchCriterion::Id(StudentId::new(99).unwrap()));
        assert!(matches.is_empty());
    }

    #[test]
    fn test_find_by_grade() {
        let roster = roster();
        // substring: "grade 1" matches all three grades
        let matches = roster.find(&SearchCriterion::Grade("grade 1".to_string()));
        assert_eq!(matches.len(), 3);

        let matches = roster.find(&SearchCriterion::Grade("12".to_string()));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name(), "John Doe");
    }
}
