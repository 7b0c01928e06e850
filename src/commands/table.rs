use std::io::{self, Write};

use crate::util::Student;

// Names wider than the column are printed in full and push the border out.
const BORDER: &str = "+------+----------------------+--------+";

pub fn write_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BORDER)?;
    writeln!(out, "| {:>4} | {:<20} | {:>6} |", "ID", "Name", "Grade")?;
    writeln!(out, "{}", BORDER)
}

pub fn write_row<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(
        out,
        "| {:>4} | {:<20} | {:>6.2} |",
        student.id, student.name, student.grade
    )
}
