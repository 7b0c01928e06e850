use std::io::{self, BufRead, Write};

use super::{Console, Flow};
use crate::util::Report;

impl<R: BufRead, W: Write, L: Report> Console<R, W, L> {
    pub(crate) fn update_grade(&mut self) -> io::Result<Flow> {
        self.log.info("--- Update Student Grade ---");

        let id = match self.read_int("Enter ID of student to update: ")? {
            Some(id) => id,
            None => return Ok(Flow::Exit),
        };
        let grade = match self.read_float("Enter new grade (0-100): ")? {
            Some(grade) => grade,
            None => return Ok(Flow::Exit),
        };

        match self.db.update_grade(id, grade) {
            Ok(()) => self
                .log
                .success(&format!("Updated grade for student ID: {}", id)),
            Err(why) => self.log.error(&format!("Could not update grade: {}", why)),
        }

        Ok(Flow::Continue)
    }
}
