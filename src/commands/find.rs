use std::io::{self, BufRead, Write};

use super::{table, Console, Flow};
use crate::util::Report;

impl<R: BufRead, W: Write, L: Report> Console<R, W, L> {
    pub(crate) fn find_student(&mut self) -> io::Result<Flow> {
        self.log.info("--- Find Student ---");

        let id = match self.read_int("Enter ID of student to find: ")? {
            Some(id) => id,
            None => return Ok(Flow::Exit),
        };

        match self.db.query_student(id) {
            Ok(Some(student)) => {
                table::write_header(&mut self.output)?;
                table::write_row(&mut self.output, &student)?;
            }
            Ok(None) => self
                .log
                .error(&format!("Student with ID {} not found.", id)),
            Err(why) => self
                .log
                .error(&format!("Could not look up student {}: {}", id, why)),
        }

        Ok(Flow::Continue)
    }
}
