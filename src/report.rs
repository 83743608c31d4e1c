//! Tabular text reports over the roster and attendance log.
//!
//! Pure string formatting; each function is a read-only pass over the
//! in-memory state. Layout matches the fixed-width tables the reporting
//! surface displays and exports.

use crate::domain::StudentId;
use crate::roster::{AttendanceLog, AttendanceStatus, Roster};
use chrono::Local;
use std::collections::BTreeMap;
use std::fmt::Write;

fn generated_footer(out: &mut String) {
    let _ = writeln!(
        out,
        "Report Generated: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}

/// The full student list with contact columns.
pub fn student_list(roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Student List Report");
    let _ = writeln!(out, "{}\n", "=".repeat(50));

    let _ = writeln!(
        out,
        "{:<5} {:<20} {:<5} {:<10} {:<15} {:<30}",
        "ID", "Name", "Age", "Grade", "Phone", "Email"
    );
    let _ = writeln!(out, "{}", "-".repeat(85));

    for student in roster.iter() {
        let contact = student.contact().map(|c| c.details()).unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<5} {:<20} {:<5} {:<10} {:<15} {:<30}",
            student.id().as_u32(),
            student.name(),
            student.age(),
            student.grade(),
            contact.phone,
            contact.email
        );
    }

    let _ = writeln!(out, "\n{}", "=".repeat(50));
    let _ = writeln!(out, "Total Students: {}", roster.len());
    generated_footer(&mut out);
    out
}

/// Per-date attendance tables plus overall per-student statistics.
pub fn attendance_summary(roster: &Roster, attendance: &AttendanceLog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Attendance Summary Report");
    let _ = writeln!(out, "{}\n", "=".repeat(50));

    if attendance.is_empty() {
        let _ = writeln!(out, "No attendance records found.");
    } else {
        // (present, absent) per student, accumulated over saved records
        let mut totals: BTreeMap<StudentId, (u32, u32)> = BTreeMap::new();

        for (date, record) in attendance.iter() {
            let _ = writeln!(out, "Date: {}", date);
            let _ = writeln!(out, "{:<5} {:<20} {:<10}", "ID", "Name", "Status");
            let _ = writeln!(out, "{}", "-".repeat(35));

            for (id, status) in record {
                // Entries for students since deleted are skipped
                let Some(student) = roster.student(*id) else {
                    continue;
                };
                let _ = writeln!(
                    out,
                    "{:<5} {:<20} {:<10}",
                    id.as_u32(),
                    student.name(),
                    status.to_string()
                );

                let counts = totals.entry(*id).or_default();
                match status {
                    AttendanceStatus::Present => counts.0 += 1,
                    AttendanceStatus::Absent => counts.1 += 1,
                }
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Overall Attendance Statistics");
        let _ = writeln!(out, "{}", "-".repeat(50));
        let _ = writeln!(
            out,
            "{:<5} {:<20} {:<10} {:<10} {:<15}",
            "ID", "Name", "Present", "Absent", "Attendance %"
        );
        let _ = writeln!(out, "{}", "-".repeat(60));

        for (id, (present, absent)) in &totals {
            let Some(student) = roster.student(*id) else {
                continue;
            };
            let total_days = present + absent;
            let percent = if total_days > 0 {
                f64::from(*present) / f64::from(total_days) * 100.0
            } else {
                0.0
            };
            let _ = writeln!(
                out,
                "{:<5} {:<20} {:<10} {:<10} {:.2}%",
                id.as_u32(),
                student.name(),
                present,
                absent,
                percent
            );
        }
    }

    let _ = writeln!(out, "\n{}", "=".repeat(50));
    generated_footer(&mut out);
    out
}

/// Student counts and percentages per grade, sorted by grade.
pub fn grade_distribution(roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Grade Distribution Report");
    let _ = writeln!(out, "{}\n", "=".repeat(50));

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for student in roster.iter() {
        *counts.entry(student.grade()).or_default() += 1;
    }

    let _ = writeln!(out, "Grade Distribution:");
    let _ = writeln!(out, "{}", "-".repeat(30));
    let _ = writeln!(out, "{:<15} {:<10} {:<15}", "Grade", "Count", "Percentage");
    let _ = writeln!(out, "{}", "-".repeat(40));

    for (grade, count) in &counts {
        let percent = *count as f64 / roster.len() as f64 * 100.0;
        let _ = writeln!(out, "{:<15} {:<10} {:.2}%", grade, count, percent);
    }

    let _ = writeln!(out, "\n{}", "=".repeat(50));
    let _ = writeln!(out, "Total Students: {}", roster.len());
    generated_footer(&mut out);
    out
}

/// Student counts per age plus min/max/average statistics.
pub fn age_distribution(roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Age Distribution Report");
    let _ = writeln!(out, "{}\n", "=".repeat(50));

    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for student in roster.iter() {
        *counts.entry(student.age()).or_default() += 1;
    }

    let _ = writeln!(out, "Age Distribution:");
    let _ = writeln!(out, "{}", "-".repeat(30));
    let _ = writeln!(out, "{:<10} {:<10} {:<15}", "Age", "Count", "Percentage");
    let _ = writeln!(out, "{}", "-".repeat(35));

    for (age, count) in &counts {
        let percent = *count as f64 / roster.len() as f64 * 100.0;
        let _ = writeln!(out, "{:<10} {:<10} {:.2}%", age, count, percent);
    }

    if !roster.is_empty() {
        let min_age = counts.keys().next().copied().unwrap_or_default();
        let max_age = counts.keys().next_back().copied().unwrap_or_default();
        let avg_age = roster.average_age().unwrap_or_default();

        let _ = writeln!(out, "\nAge Statistics:");
        let _ = writeln!(out, "{}", "-".repeat(30));
        let _ = writeln!(out, "Minimum Age: {}", min_age);
        let _ = writeln!(out, "Maximum Age: {}", max_age);
        let _ = writeln!(out, "Average Age: {:.2}", avg_age);
    }

    let _ = writeln!(out, "\n{}", "=".repeat(50));
    let _ = writeln!(out, "Total Students: {}", roster.len());
    generated_footer(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, NewStudent};
    use crate::roster::AttendanceRecord;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster
            .add_student(NewStudent {
                name: "John Doe".to_string(),
                age: 18,
                grade: "Grade 12".to_string(),
                contact: Some(Contact::new("12345678901", "john.doe@example.com").unwrap()),
            })
            .unwrap();
        roster
            .add_student(NewStudent {
                name: "Jane Smith".to_string(),
                age: 17,
                grade: "Grade 11".to_string(),
                contact: None,
            })
            .unwrap();
        roster
    }

    #[test]
    fn test_student_list_contains_rows_and_total() {
        let report = student_list(&sample_roster());
        assert!(report.starts_with("Student List Report"));
        assert!(report.contains("John Doe"));
        assert!(report.contains("john.doe@example.com"));
        assert!(report.contains("Total Students: 2"));
    }

    #[test]
    fn test_attendance_summary_empty_log() {
        let report = attendance_summary(&sample_roster(), &AttendanceLog::new());
        assert!(report.contains("No attendance records found."));
    }

    #[test]
    fn test_attendance_summary_percentages() {
        let roster = sample_roster();
        let mut log = AttendanceLog::new();

        let john = StudentId::new(1).unwrap();
        let jane = StudentId::new(2).unwrap();
        for (day, john_status) in [
            ("2024-09-02", AttendanceStatus::Present),
            ("2024-09-03", AttendanceStatus::Absent),
        ] {
            let mut record = AttendanceRecord::new();
            record.insert(john, john_status);
            record.insert(jane, AttendanceStatus::Present);
            log.save(day.parse().unwrap(), record);
        }

        let report = attendance_summary(&roster, &log);
        assert!(report.contains("Date: 2024-09-02"));
        assert!(report.contains("Overall Attendance Statistics"));
        // John: 1 of 2 present; Jane: 2 of 2
        assert!(report.contains("50.00%"));
        assert!(report.contains("100.00%"));
    }

    #[test]
    fn test_grade_distribution() {
        let report = grade_distribution(&sample_roster());
        assert!(report.contains("Grade 11"));
        assert!(report.contains("Grade 12"));
        assert!(report.contains("50.00%"));
    }

    #[test]
    fn test_age_distribution_statistics() {
        let report = age_distribution(&sample_roster());
        assert!(report.contains("Minimum Age: 17"));
        assert!(report.contains("Maximum Age: 18"));
        assert!(report.contains("Average Age: 17.50"));
    }
}
