use std::io::{self, BufRead, Write};

use super::{Console, Flow};
use crate::util::Report;

impl<R: BufRead, W: Write, L: Report> Console<R, W, L> {
    pub(crate) fn remove_student(&mut self) -> io::Result<Flow> {
        self.log.info("--- Remove Student ---");

        let id = match self.read_int("Enter ID of student to remove: ")? {
            Some(id) => id,
            None => return Ok(Flow::Exit),
        };

        match self.db.delete_student(id) {
            Ok(()) => self.log.success(&format!("Removed student with ID: {}", id)),
            Err(why) => self
                .log
                .error(&format!("Could not remove student: {}", why)),
        }

        Ok(Flow::Continue)
    }
}
