use colored::{ColoredString, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Success,
    Info,
}

impl Level {
    pub fn tag(self) -> ColoredString {
        match self {
            Level::Error => "[ ERROR ]".red(),
            Level::Success => "[ OK ]   ".green(),
            Level::Info => "[ INFO ]  ".yellow(),
        }
    }
}

/// Sink for the status lines every operation produces.
pub trait Report {
    fn report(&mut self, level: Level, msg: &str);

    fn error(&mut self, msg: &str) {
        self.report(Level::Error, msg)
    }

    fn success(&mut self, msg: &str) {
        self.report(Level::Success, msg)
    }

    fn info(&mut self, msg: &str) {
        self.report(Level::Info, msg)
    }
}

/// Writes errors to stderr and everything else to stdout.
pub struct Terminal;

impl Report for Terminal {
    fn report(&mut self, level: Level, msg: &str) {
        match level {
            Level::Error => eprintln!("{} {}", level.tag(), msg),
            _ => println!("{} {}", level.tag(), msg),
        }
    }
}

/// Keeps every line in memory, for driving the console from tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Recorder {
    pub lines: Vec<(Level, String)>,
}

#[cfg(test)]
impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, level: Level) -> usize {
        self.lines.iter().filter(|(l, _)| *l == level).count()
    }

    pub fn last(&self) -> Option<&(Level, String)> {
        self.lines.last()
    }
}

#[cfg(test)]
impl Report for Recorder {
    fn report(&mut self, level: Level, msg: &str) {
        self.lines.push((level, msg.to_owned()))
    }
}
