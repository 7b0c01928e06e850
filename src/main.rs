use std::{io, process};

use clap::Parser;
use roster::{
    commands::{shutdown, startup, Console},
    util::{Report, Terminal},
};

#[derive(Parser)]
#[clap(name = "Roster")]
#[clap(version = "0.1")]
#[clap(about = "Manage the student roster database")]
struct Cli {
    /// Database file to open, created if missing
    #[clap(short, long, default_value = "university.db")]
    db: String,
}

/// Runs the menu until the operator exits and returns the process exit
/// status. The database is closed before this returns.
fn run<L: Report>(cli: &Cli, log: &mut L) -> i32 {
    let db = match startup(&cli.db, log) {
        Ok(db) => db,
        Err(why) => {
            log.error(&why.to_string());
            return 1;
        }
    };

    let stdin = io::stdin();
    let mut console = Console::new(db, stdin.lock(), io::stdout(), Terminal);
    let outcome = console.run();

    let (db, _, _) = console.into_parts();
    shutdown(db, log);

    match outcome {
        Ok(()) => 0,
        Err(why) => {
            log.error(&format!("Console I/O failed: {}", why));
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli, &mut Terminal));
}
