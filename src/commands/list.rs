use std::io::{self, BufRead, Write};

use super::{table, Console, Flow};
use crate::util::Report;

impl<R: BufRead, W: Write, L: Report> Console<R, W, L> {
    pub(crate) fn list_students(&mut self) -> io::Result<Flow> {
        self.log.info("--- All Students ---");

        let students = match self.db.query_students() {
            Ok(students) => students,
            Err(why) => {
                self.log
                    .error(&format!("Could not retrieve students: {}", why));
                return Ok(Flow::Continue);
            }
        };

        if students.is_empty() {
            self.log.info("No students in the database.");
            return Ok(Flow::Continue);
        }

        table::write_header(&mut self.output)?;
        for student in &students {
            table::write_row(&mut self.output, student)?;
        }

        Ok(Flow::Continue)
    }
}
