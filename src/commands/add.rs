use std::io::{self, BufRead, Write};

use super::{Console, Flow};
use crate::util::Report;

impl<R: BufRead, W: Write, L: Report> Console<R, W, L> {
    pub(crate) fn add_student(&mut self) -> io::Result<Flow> {
        self.log.info("--- Add New Student ---");

        let name = match self.read_nonempty("Enter student name: ")? {
            Some(name) => name,
            None => return Ok(Flow::Exit),
        };
        let grade = match self.read_float("Enter student grade (0-100): ")? {
            Some(grade) => grade,
            None => return Ok(Flow::Exit),
        };

        match self.db.insert_student(&name, grade) {
            Ok(id) => self
                .log
                .success(&format!("Added student: {} (ID {})", name, id)),
            Err(why) => self
                .log
                .error(&format!("Could not add student {}: {}", name, why)),
        }

        Ok(Flow::Continue)
    }
}
