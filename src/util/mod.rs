pub mod db;
pub mod log;
pub mod records;

pub use db::{Db, DbError, Student};
pub use log::{Level, Report, Terminal};
#[cfg(test)]
pub use log::Recorder;
pub use records::Roster;
