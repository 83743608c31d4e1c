//! CSV import/export of the roster.
//!
//! Rows carry `{ID, Name, Age, Grade, Phone, Email}`. Export walks the
//! roster in id order; import validates every row through the domain
//! constructors before anything is admitted, so a bad row aborts the whole
//! import with its row number and the roster is untouched.

use crate::domain::StudentId;
use crate::error::{CsvError, CsvResult};
use crate::models::{Contact, Student};
use crate::roster::Roster;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::info;

/// One CSV row in the exchange format.
#[derive(Debug, Serialize, Deserialize)]
struct StudentRow {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Grade")]
    grade: String,
    #[serde(rename = "Phone")]
    phone: String,
    #[serde(rename = "Email")]
    email: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        let contact = student.contact().map(|c| c.details());
        Self {
            id: student.id().as_u32(),
            name: student.name().to_string(),
            age: student.age(),
            grade: student.grade().to_string(),
            phone: contact.as_ref().map(|c| c.phone.clone()).unwrap_or_default(),
            email: contact.map(|c| c.email).unwrap_or_default(),
        }
    }
}

impl StudentRow {
    /// Rebuild the validated student this row describes.
    fn into_student(self, row: usize) -> CsvResult<Student> {
        let invalid = |source| CsvError::InvalidRow { row, source };

        let id = StudentId::new(self.id).map_err(invalid)?;

        // Students exported without a contact carry empty phone/email cells
        let contact = if self.phone.is_empty() && self.email.is_empty() {
            None
        } else {
            Some(Contact::new(self.phone, self.email).map_err(invalid)?)
        };

        Student::new(id, self.name, self.age, self.grade, contact).map_err(invalid)
    }
}

/// Write the roster as CSV, returning the number of rows written.
pub fn export_students<W: io::Write>(roster: &Roster, writer: W) -> CsvResult<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut count = 0;
    for student in roster.iter() {
        wtr.serialize(StudentRow::from(student))?;
        count += 1;
    }
    wtr.flush()?;
    Ok(count)
}

/// Export the roster to a CSV file at `path`.
pub fn export_to_path(roster: &Roster, path: impl AsRef<Path>) -> CsvResult<usize> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let count = export_students(roster, file)?;
    info!("Exported student data to {}", path.display());
    Ok(count)
}

/// Parse and validate every row, producing students in file order.
///
/// # Errors
///
/// `CsvError::Malformed` for header/arity/cell-parse failures,
/// `CsvError::InvalidRow` (with the 1-based data row number) when a row's
/// values fail domain validation. No partial result is returned.
pub fn parse_students<R: io::Read>(reader: R) -> CsvResult<Vec<Student>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut students = Vec::new();
    for (index, result) in rdr.deserialize::<StudentRow>().enumerate() {
        let row = result?;
        students.push(row.into_student(index + 1)?);
    }
    Ok(students)
}

/// Import students from CSV into the roster, returning how many were
/// admitted.
///
/// The whole file is parsed and validated first; on any error nothing is
/// admitted. Explicit id columns override the roster's id counter when
/// larger, and an existing student at an imported id is replaced.
pub fn import_students<R: io::Read>(roster: &mut Roster, reader: R) -> CsvResult<usize> {
    let students = parse_students(reader)?;
    let count = students.len();
    for student in students {
        roster.admit_with_id(student);
    }
    Ok(count)
}

/// Import students from a CSV file at `path`.
pub fn import_from_path(roster: &mut Roster, path: impl AsRef<Path>) -> CsvResult<usize> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let count = import_students(roster, file)?;
    info!("Imported student data from {}", path.display());
    Ok(count)
}
