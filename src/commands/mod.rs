pub mod add;
pub mod find;
pub mod list;
pub mod prompt;
pub mod remove;
pub mod table;
pub mod update;

use std::io::{self, BufRead, Write};

use crate::util::{Db, DbError, Report};

const MENU: &str = "
--- University Database Menu ---
1. Add Student
2. Remove Student
3. Update Student Grade
4. Find Student by ID
5. View All Students
0. Exit";

/// Opens the database at `path` and makes sure the table exists. A
/// database that opened but cannot hold the table is closed again.
pub fn startup<L: Report>(path: &str, log: &mut L) -> Result<Db, DbError> {
    let db = Db::open(path)?;
    log.success(&format!("Database opened successfully: {}", db.path()));

    if let Err(why) = db.ensure_schema() {
        shutdown(db, log);
        return Err(why);
    }
    log.info("Table 'STUDENTS' is ready.");

    Ok(db)
}

pub fn shutdown<L: Report>(db: Db, log: &mut L) {
    match db.close() {
        Ok(()) => log.info("Database connection closed."),
        Err(why) => log.error(&why.to_string()),
    }
}

/// What the menu loop does after a sub-flow returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The interactive menu. Owns the database for as long as it runs.
pub struct Console<R, W, L> {
    db: Db,
    input: R,
    output: W,
    log: L,
}

impl<R: BufRead, W: Write, L: Report> Console<R, W, L> {
    pub fn new(db: Db, input: R, output: W, log: L) -> Self {
        Self {
            db,
            input,
            output,
            log,
        }
    }

    /// Shows the menu and dispatches choices until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;

            let flow = match self.read_int("Enter your choice: ")? {
                Some(choice) => self.dispatch(choice)?,
                None => Flow::Exit,
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: i64) -> io::Result<Flow> {
        match choice {
            1 => self.add_student(),
            2 => self.remove_student(),
            3 => self.update_grade(),
            4 => self.find_student(),
            5 => self.list_students(),
            0 => {
                self.log.info("Exiting program.");
                Ok(Flow::Exit)
            }
            _ => {
                self.log.error("Invalid choice. Please try again.");
                Ok(Flow::Continue)
            }
        }
    }

    pub fn into_parts(self) -> (Db, W, L) {
        (self.db, self.output, self.log)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::util::{Level, Recorder};

    fn run(db: Db, script: &str) -> (Db, String, Recorder) {
        let mut console = Console::new(
            db,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            Recorder::new(),
        );
        console.run().expect("Console loop failed");

        let (db, output, log) = console.into_parts();
        (db, String::from_utf8(output).unwrap(), log)
    }

    fn roster_db() -> Db {
        let db = Db::open_in_memory().unwrap();
        db.ensure_schema().unwrap();
        db
    }

    fn errors(log: &Recorder) -> Vec<&str> {
        log.lines
            .iter()
            .filter(|(level, _)| *level == Level::Error)
            .map(|(_, msg)| msg.as_str())
            .collect()
    }

    #[test]
    fn add_then_list() {
        let (db, output, log) = run(roster_db(), "1\nAlice\n92.5\n5\n0\n");

        assert!(output.contains("|    1 | Alice                |  92.50 |"));
        assert!(log
            .lines
            .contains(&(Level::Success, "Added student: Alice (ID 1)".to_owned())));
        assert_eq!(
            log.last(),
            Some(&(Level::Info, "Exiting program.".to_owned()))
        );
        assert_eq!(db.query_students().unwrap().len(), 1);
    }

    #[test]
    fn menu_is_shown_before_every_choice() {
        let (_, output, _) = run(roster_db(), "9\n0\n");

        assert_eq!(output.matches("--- University Database Menu ---").count(), 2);
        assert_eq!(output.matches("Enter your choice: ").count(), 2);
    }

    #[test]
    fn invalid_choice_continues() {
        let (_, _, log) = run(roster_db(), "7\n-1\n0\n");

        assert_eq!(
            errors(&log),
            vec![
                "Invalid choice. Please try again.",
                "Invalid choice. Please try again."
            ]
        );
        assert_eq!(
            log.last(),
            Some(&(Level::Info, "Exiting program.".to_owned()))
        );
    }

    #[test]
    fn non_numeric_choice_reprompts() {
        let (_, _, log) = run(roster_db(), "list\n0\n");

        assert_eq!(errors(&log), vec!["Invalid input. Please enter a number."]);
    }

    #[test]
    fn remove_missing_reports_once() {
        let db = roster_db();
        db.insert_student("Alice", 92.5).unwrap();
        let (db, _, log) = run(db, "2\n5\n0\n");

        assert_eq!(errors(&log), vec!["Could not remove student: ID 5 not found"]);
        assert_eq!(log.count(Level::Success), 0);
        assert_eq!(db.query_students().unwrap().len(), 1);
    }

    #[test]
    fn remove_then_find() {
        let db = roster_db();
        let id = db.insert_student("Bob", 70.0).unwrap();
        let script = format!("2\n{id}\n4\n{id}\n0\n", id = id);
        let (db, _, log) = run(db, &script);

        assert!(log
            .lines
            .contains(&(Level::Success, format!("Removed student with ID: {}", id))));
        assert_eq!(
            errors(&log),
            vec![format!("Student with ID {} not found.", id)]
        );
        assert!(db.query_students().unwrap().is_empty());
    }

    #[test]
    fn update_then_find() {
        let (db, output, log) = run(roster_db(), "1\nBob\n70\n3\n1\n80.25\n4\n1\n0\n");

        assert!(output.contains("|    1 | Bob                  |  80.25 |"));
        assert!(log
            .lines
            .contains(&(Level::Success, "Updated grade for student ID: 1".to_owned())));
        assert_eq!(db.query_student(1).unwrap().unwrap().grade, 80.25);
    }

    #[test]
    fn update_missing_on_empty_table() {
        let (db, _, log) = run(roster_db(), "3\n999\n50\n0\n");

        assert_eq!(errors(&log), vec!["Could not update grade: ID 999 not found"]);
        assert!(db.query_students().unwrap().is_empty());
    }

    #[test]
    fn list_empty_table() {
        let (_, output, log) = run(roster_db(), "5\n0\n");

        assert!(log
            .lines
            .contains(&(Level::Info, "No students in the database.".to_owned())));
        assert!(!output.contains("| Name"));
    }

    #[test]
    fn name_and_grade_reprompt() {
        let (db, _, log) = run(roster_db(), "1\n\nCarol\nninety\n90\n0\n");

        assert_eq!(
            errors(&log),
            vec![
                "Input cannot be empty.",
                "Invalid input. Please enter a number (e.g., 85.5)."
            ]
        );
        assert_eq!(db.query_student(1).unwrap().unwrap().name, "Carol");
    }

    #[test]
    fn missing_table_is_reported_not_fatal() {
        let db = Db::open_in_memory().unwrap();
        let (_, _, log) = run(db, "1\nAlice\n90\n5\n0\n");

        let errors = errors(&log);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("Could not add student Alice:"));
        assert!(errors[1].starts_with("Could not retrieve students:"));
        assert_eq!(
            log.last(),
            Some(&(Level::Info, "Exiting program.".to_owned()))
        );
    }

    #[test]
    fn non_finite_grade_reprompts() {
        let (db, _, log) = run(roster_db(), "1\nAlice\nnan\ninf\n90\n0\n");

        assert_eq!(
            errors(&log),
            vec![
                "Invalid input. Please enter a number (e.g., 85.5).",
                "Invalid input. Please enter a number (e.g., 85.5)."
            ]
        );
        assert_eq!(db.query_student(1).unwrap().unwrap().grade, 90.0);
    }

    #[test]
    fn startup_creates_table() {
        let dir = tempfile::tempdir().expect("Unable to create tempdir");
        let path = dir.path().join("university.db");
        let mut log = Recorder::new();

        let db = startup(path.to_str().unwrap(), &mut log).unwrap();
        assert!(db.query_students().unwrap().is_empty());
        assert_eq!(
            log.last(),
            Some(&(Level::Info, "Table 'STUDENTS' is ready.".to_owned()))
        );

        shutdown(db, &mut log);
        assert_eq!(
            log.last(),
            Some(&(Level::Info, "Database connection closed.".to_owned()))
        );
    }

    #[test]
    fn startup_in_missing_directory() {
        let dir = tempfile::tempdir().expect("Unable to create tempdir");
        let path = dir.path().join("missing").join("university.db");
        let mut log = Recorder::new();

        assert!(matches!(
            startup(path.to_str().unwrap(), &mut log),
            Err(DbError::Connection { .. })
        ));
        assert!(log.lines.is_empty());
    }

    #[test]
    fn startup_on_garbage_file_closes() {
        let mut file = tempfile::Builder::new()
            .prefix("garbage")
            .suffix(".db")
            .tempfile()
            .expect("Unable to create tempfile");
        file.write_all(&[b'x'; 1024])
            .expect("Unable to write garbage");
        let mut log = Recorder::new();

        assert!(matches!(
            startup(file.path().to_str().unwrap(), &mut log),
            Err(DbError::Schema(_))
        ));
        assert_eq!(log.count(Level::Success), 1);
        assert_eq!(
            log.last(),
            Some(&(Level::Info, "Database connection closed.".to_owned()))
        );
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (db, _, log) = run(roster_db(), "1\nAlice\n");

        assert!(db.query_students().unwrap().is_empty());
        assert_eq!(log.count(Level::Error), 0);
    }
}
