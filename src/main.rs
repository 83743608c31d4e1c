//! Student Roster - terminal front end.
//!
//! An interactive menu loop over the roster library: field collection with
//! re-prompting on bad input, tabular display, attendance marking, reports,
//! and CSV exchange. The single calling context owning all state.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use student_roster::{
    csv_io, report, ActivityEvent, ActivityLog, AttendanceLog, AttendanceRecord,
    AttendanceStatus, Config, Contact, EmailAddress, NewStudent, PhoneNumber, Roster,
    SearchCriterion, Student, StudentId, StudentUpdate,
};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Configuration decides the default log level, so load it first
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut app = App::new(config);
    app.run()
}

/// The single calling context: owns the roster, attendance, and activity state.
struct App {
    config: Config,
    roster: Roster,
    attendance: AttendanceLog,
    activity: ActivityLog,
}

impl App {
    fn new(config: Config) -> Self {
        let activity = ActivityLog::new(config.activity_capacity);
        Self {
            config,
            roster: Roster::new(),
            attendance: AttendanceLog::new(),
            activity,
        }
    }

    fn run(&mut self) -> Result<()> {
        loop {
            println!("\nStudent Management System");
            println!("{}", "=".repeat(30));
            println!("1. Add New Student");
            println!("2. Display Student Information");
            println!("3. Update Student Details");
            println!("4. List All Students");
            println!("5. Delete Student");
            println!("6. Search Students");
            println!("7. Take Attendance");
            println!("8. Load Attendance");
            println!("9. Generate Reports");
            println!("10. Export Data");
            println!("11. Import Data");
            println!("12. Recent Activities");
            println!("0. Exit");
            println!("{}", "=".repeat(30));

            let Some(choice) = read_line("Enter your choice (0-12): ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_student()?,
                "2" => self.display_student()?,
                "3" => self.update_student()?,
                "4" => self.list_students(),
                "5" => self.delete_student()?,
                "6" => self.search_students()?,
                "7" => self.take_attendance()?,
                "8" => self.load_attendance()?,
                "9" => self.generate_report()?,
                "10" => self.export_data()?,
                "11" => self.import_data()?,
                "12" => self.recent_activities(),
                "0" => break,
                _ => println!("Invalid choice. Please enter a number between 0 and 12."),
            }
        }

        info!("Exiting program...");
        println!("Thank you for using the Student Management System. Goodbye!");
        Ok(())
    }

    fn add_student(&mut self) -> Result<()> {
        let Some(fields) = collect_student_fields()? else {
            return Ok(());
        };
        let (name, age, grade, contact) = fields;
        let display_name = name.clone();

        match self.roster.add_student(NewStudent {
            name,
            age,
            grade,
            contact: Some(contact),
        }) {
            Ok(id) => {
                self.activity.record(ActivityEvent::StudentAdded {
                    id,
                    name: display_name,
                });
                println!("Student added successfully with ID: {}", id);
            }
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn display_student(&mut self) -> Result<()> {
        let Some(id) = read_student_id()? else {
            return Ok(());
        };

        match self.roster.student(id) {
            Some(student) => print_student(student),
            None => println!("Student not found."),
        }
        Ok(())
    }

    fn update_student(&mut self) -> Result<()> {
        let Some(id) = read_student_id()? else {
            return Ok(());
        };
        if self.roster.student(id).is_none() {
            println!("Student not found.");
            return Ok(());
        }

        let Some((name, age, grade, contact)) = collect_student_fields()? else {
            return Ok(());
        };

        let update = StudentUpdate {
            name: Some(name),
            age: Some(age),
            grade: Some(grade),
            contact: Some(contact),
        };
        match self.roster.update_student(id, update) {
            Ok(details) => {
                self.activity.record(ActivityEvent::StudentUpdated {
                    id,
                    name: details.name,
                });
                println!("Student details updated successfully.");
            }
            Err(e) => println!("Error: {}", e),
        }
        Ok(())
    }

    fn list_students(&self) {
        if self.roster.is_empty() {
            println!("No students in the system.");
            return;
        }

        println!("\nAll Students:");
        println!("{}", "-".repeat(50));
        println!("{:<5} {:<20} {:<5} {:<10}", "ID", "Name", "Age", "Grade");
        println!("{}", "-".repeat(50));
        for student in self.roster.iter() {
            println!(
                "{:<5} {:<20} {:<5} {:<10}",
                student.id().as_u32(),
                student.name(),
                student.age(),
                student.grade()
            );
        }
    }

    fn delete_student(&mut self) -> Result<()> {
        let Some(id) = read_student_id()? else {
            return Ok(());
        };

        match self.roster.delete_student(id) {
            Ok(student) => {
                self.activity.record(ActivityEvent::StudentDeleted {
                    id,
                    name: student.name().to_string(),
                });
                println!("Student {} deleted successfully.", student.name());
            }
            Err(_) => println!("Student not found."),
        }
        Ok(())
    }

    fn search_students(&mut self) -> Result<()> {
        println!("Search by: 1. Name  2. ID  3. Grade");
        let Some(choice) = read_line("Enter your choice (1-3): ")? else {
            return Ok(());
        };

        let criterion = match choice.as_str() {
            "1" => {
                let Some(query) = read_line("Enter name to search: ")? else {
                    return Ok(());
                };
                SearchCriterion::Name(query)
            }
            "2" => {
                let Some(id) = read_student_id()? else {
                    return Ok(());
                };
                SearchCriterion::Id(id)
            }
            "3" => {
                let Some(query) = read_line("Enter grade to search: ")? else {
                    return Ok(());
                };
                SearchCriterion::Grade(query)
            }
            _ => {
                println!("Invalid choice.");
                return Ok(());
            }
        };

        let matches = self.roster.find(&criterion);
        if matches.is_empty() {
            println!("No matching students found.");
        } else {
            println!("\n{:<5} {:<20} {:<5} {:<10}", "ID", "Name", "Age", "Grade");
            println!("{}", "-".repeat(50));
            for student in matches {
                println!(
                    "{:<5} {:<20} {:<5} {:<10}",
                    student.id().as_u32(),
                    student.name(),
                    student.age(),
                    student.grade()
                );
            }
        }
        Ok(())
    }

    fn take_attendance(&mut self) -> Result<()> {
        if self.roster.is_empty() {
            println!("No students in the system.");
            return Ok(());
        }
        let Some(date) = read_date()? else {
            return Ok(());
        };

        let mut record = AttendanceRecord::new();
        for student in self.roster.iter() {
            let Some(answer) = read_line(&format!("{} present? (y/n): ", student.name()))? else {
                return Ok(());
            };
            let status = if answer.eq_ignore_ascii_case("y") {
                AttendanceStatus::Present
            } else {
                AttendanceStatus::Absent
            };
            record.insert(student.id(), status);
        }

        self.attendance.save(date, record);
        self.activity.record(ActivityEvent::AttendanceSaved { date });
        println!("Attendance for {} saved successfully", date);
        Ok(())
    }

    fn load_attendance(&mut self) -> Result<()> {
        let Some(date) = read_date()? else {
            return Ok(());
        };

        let statuses = self.attendance.load(date, &self.roster);
        if statuses.is_empty() {
            println!("No students in the system.");
            return Ok(());
        }

        println!("\nAttendance for {}:", date);
        println!("{:<5} {:<20} {:<10} {:<10}", "ID", "Name", "Grade", "Status");
        println!("{}", "-".repeat(50));
        for (id, status) in &statuses {
            if let Some(student) = self.roster.student(*id) {
                println!(
                    "{:<5} {:<20} {:<10} {:<10}",
                    id.as_u32(),
                    student.name(),
                    student.grade(),
                    status.to_string()
                );
            }
        }
        Ok(())
    }

    fn generate_report(&mut self) -> Result<()> {
        println!("Reports: 1. Student List  2. Attendance Summary  3. Grade Distribution  4. Age Distribution");
        let Some(choice) = read_line("Enter your choice (1-4): ")? else {
            return Ok(());
        };

        let text = match choice.as_str() {
            "1" => report::student_list(&self.roster),
            "2" => report::attendance_summary(&self.roster, &self.attendance),
            "3" => report::grade_distribution(&self.roster),
            "4" => report::age_distribution(&self.roster),
            _ => {
                println!("Invalid choice.");
                return Ok(());
            }
        };
        println!("\n{}", text);
        Ok(())
    }

    fn export_data(&mut self) -> Result<()> {
        let prompt = format!("Export path [{}]: ", self.config.export_path);
        let Some(input) = read_line(&prompt)? else {
            return Ok(());
        };
        let path = if input.is_empty() {
            self.config.export_path.clone()
        } else {
            input
        };

        match csv_io::export_to_path(&self.roster, &path) {
            Ok(count) => {
                self.activity
                    .record(ActivityEvent::DataExported { path: path.clone() });
                println!("Exported {} students to {}", count, path);
            }
            Err(e) => println!("Error exporting data: {}", e),
        }
        Ok(())
    }

    fn import_data(&mut self) -> Result<()> {
        let Some(path) = read_line("Import path: ")? else {
            return Ok(());
        };
        if path.is_empty() {
            println!("No file given.");
            return Ok(());
        }

        match csv_io::import_from_path(&mut self.roster, &path) {
            Ok(count) => {
                self.activity
                    .record(ActivityEvent::DataImported { path: path.clone() });
                println!("Imported {} students from {}", count, path);
            }
            Err(e) => println!("Error importing data: {}", e),
        }
        Ok(())
    }

    fn recent_activities(&self) {
        if self.activity.is_empty() {
            println!("No recent activities.");
            return;
        }
        println!("\nRecent Activities:");
        for entry in self.activity.entries() {
            println!("{}", entry);
        }
    }
}

/// Print a prompt and read one trimmed line; `None` means end of input.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt repeatedly until the input parses; `None` means end of input.
fn read_validated<T>(
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> io::Result<Option<T>> {
    loop {
        let Some(input) = read_line(prompt)? else {
            return Ok(None);
        };
        match parse(&input) {
            Ok(value) => return Ok(Some(value)),
            Err(message) => println!("Error: {}", message),
        }
    }
}

fn read_student_id() -> io::Result<Option<StudentId>> {
    read_validated("Enter student ID: ", |s| {
        let id: u32 = s.parse().map_err(|_| "Please enter a valid integer.".to_string())?;
        StudentId::new(id).map_err(|e| e.to_string())
    })
}

/// Date in `YYYY-MM-DD`; an empty input means today.
fn read_date() -> io::Result<Option<NaiveDate>> {
    read_validated("Enter date (YYYY-MM-DD, empty for today): ", |s| {
        if s.is_empty() {
            return Ok(Local::now().date_naive());
        }
        s.parse::<NaiveDate>()
            .map_err(|_| "Date must be in YYYY-MM-DD format.".to_string())
    })
}

/// Collect name, age, grade, and contact with per-field re-prompting.
fn collect_student_fields() -> io::Result<Option<(String, u32, String, Contact)>> {
    let Some(name) = read_validated("Enter student name: ", |s| {
        if s.is_empty() || s.chars().any(|c| c.is_ascii_digit()) {
            return Err("Name must be a non-empty string without numbers".to_string());
        }
        Ok(s.to_string())
    })?
    else {
        return Ok(None);
    };

    let Some(age) = read_validated("Enter student age: ", |s| {
        let age: u32 = s
            .parse()
            .map_err(|_| "Age must be a valid integer".to_string())?;
        if age == 0 {
            return Err("Age must be a positive integer".to_string());
        }
        Ok(age)
    })?
    else {
        return Ok(None);
    };

    let Some(grade) = read_validated("Enter student grade: ", |s| {
        if s.is_empty() {
            return Err("Grade must be a non-empty string".to_string());
        }
        Ok(s.to_string())
    })?
    else {
        return Ok(None);
    };

    let Some(phone) = read_validated("Enter student phone number (11 digits): ", |s| {
        PhoneNumber::new(s).map_err(|e| e.to_string())
    })?
    else {
        return Ok(None);
    };

    let Some(email) = read_validated("Enter student email: ", |s| {
        EmailAddress::new(s).map_err(|e| e.to_string())
    })?
    else {
        return Ok(None);
    };

    match Contact::new(phone.as_str(), email.as_str()) {
        Ok(contact) => Ok(Some((name, age, grade, contact))),
        Err(e) => {
            println!("Error: {}", e);
            Ok(None)
        }
    }
}

fn print_student(student: &Student) {
    let details = student.details();
    println!("\nStudent Information:");
    println!("ID: {}", details.id);
    println!("Name: {}", details.name);
    println!("Age: {}", details.age);
    println!("Grade: {}", details.grade);

    if let Some(contact) = details.contact {
        println!("\nContact Information:");
        println!("Phone: {}", contact.phone);
        println!("Email: {}", contact.email);
    }
}
