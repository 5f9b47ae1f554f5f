//! StaffDB CLI
//!
//! Command-line and interactive front end for the employee store.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use staffdb::index::ScanOutcome;
use staffdb::{Config, Employee, ScanOrder, StaffDb};
use tracing_subscriber::{fmt, EnvFilter};

/// StaffDB
#[derive(Parser, Debug)]
#[command(name = "staffdb")]
#[command(about = "A CRUD tool for a text-file based employee database")]
#[command(version)]
struct Args {
    /// Directory holding the `<id>.txt` records
    #[arg(short, long, default_value = "./people")]
    dir: PathBuf,

    /// Directory for the `<id>.ser` records (default: "<dir> serialized")
    #[arg(long)]
    serialized_dir: Option<PathBuf>,

    /// Worker threads for `serialize`
    #[arg(short, long)]
    workers: Option<usize>,

    /// Scan order for find/find-all/load-all: numeric or directory
    #[arg(long, default_value = "numeric")]
    scan_order: ScanOrder,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Record(RecordCommand),

    /// Print the current data directory
    Path,

    /// Start an interactive shell
    Shell,
}

/// Commands available both one-shot and inside the shell
#[derive(Subcommand, Debug)]
enum RecordCommand {
    /// Add a new employee (overwrites an existing id)
    Add {
        id: i64,
        first_name: String,
        last_name: String,
        hire_date: i64,
    },

    /// Update an existing employee
    Update {
        id: i64,
        first_name: String,
        last_name: String,
        hire_date: i64,
    },

    /// Delete the employee with a matching id
    Delete { id: i64 },

    /// Print the raw data of every employee
    Print,

    /// Serialize every text record into the binary store
    Serialize,

    /// Deserialize an employee by id
    Deserialize { id: i64 },

    /// Find the first employee with a matching last name
    Find { last_name: String },

    /// Find every employee with a matching last name
    #[command(alias = "findAll")]
    FindAll { last_name: String },

    /// Load every employee into a map and print it
    #[command(alias = "hash-map", alias = "hashMap")]
    LoadAll,
}

/// One line typed into the shell
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    #[command(flatten)]
    Record(RecordCommand),

    /// Print or change the current data directory
    Path {
        #[command(subcommand)]
        action: Option<PathAction>,
    },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Subcommand, Debug)]
enum PathAction {
    /// Set the path to the people directory
    Set { dir: PathBuf },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,staffdb=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .data_dir(&args.dir)
        .scan_order(args.scan_order);
    if let Some(dir) = &args.serialized_dir {
        builder = builder.serialized_dir(dir);
    }
    if let Some(workers) = args.workers {
        builder = builder.serialize_workers(workers);
    }
    let config = builder.build();

    tracing::debug!("StaffDB v{}", staffdb::VERSION);

    let result = match args.command {
        Commands::Record(command) => run(&StaffDb::new(config), command),
        Commands::Path => {
            print_path(&config);
            Ok(())
        }
        Commands::Shell => shell(config),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Run one record command and print its result
fn run(db: &StaffDb, command: RecordCommand) -> staffdb::Result<()> {
    match command {
        RecordCommand::Add {
            id,
            first_name,
            last_name,
            hire_date,
        } => {
            db.add(&Employee::new(id, first_name, last_name, hire_date))?;
            println!("Employee successfully added");
        }
        RecordCommand::Update {
            id,
            first_name,
            last_name,
            hire_date,
        } => {
            db.update(&Employee::new(id, first_name, last_name, hire_date))?;
            println!("Employee {} successfully updated", id);
        }
        RecordCommand::Delete { id } => {
            db.delete(id)?;
            println!("Employee {} successfully deleted", id);
        }
        RecordCommand::Print => {
            let start = Instant::now();
            for (_, raw) in db.raw_records()? {
                println!("{}", raw.trim_end());
            }
            println!("Elapsed time: {:?}", start.elapsed());
        }
        RecordCommand::Serialize => {
            let report = db.serialize_all()?;
            for failure in &report.failures {
                eprintln!("{}: {}", failure.path.display(), failure.error);
            }
            println!(
                "Finished serialization: {} converted, {} failed. Time elapsed: {:?}",
                report.converted.len(),
                report.failures.len(),
                report.elapsed
            );
        }
        RecordCommand::Deserialize { id } => {
            println!("{}", db.deserialize(id)?);
        }
        RecordCommand::Find { last_name } => {
            let outcome = db.find(&last_name)?;
            report_failures(&outcome);
            let employee =
                outcome.into_match(format!("no employee with last name '{}'", last_name))?;
            println!("{}", employee);
        }
        RecordCommand::FindAll { last_name } => {
            let outcome = db.find_all(&last_name)?;
            println!("{} employees found", outcome.records.len());
            for employee in &outcome.records {
                println!("{}", employee);
            }
            report_failures(&outcome);
        }
        RecordCommand::LoadAll => {
            let start = Instant::now();
            let outcome = db.load_all()?;
            for employee in outcome.records.values() {
                println!("{}", employee);
            }
            println!("Elapsed time: {:?}", start.elapsed());
            report_failures(&outcome);
        }
    }

    Ok(())
}

fn report_failures<T>(outcome: &ScanOutcome<T>) {
    for failure in &outcome.failures {
        eprintln!("record {}: {}", failure.id, failure.error);
    }
}

fn print_path(config: &Config) {
    println!("current path: {}", config.data_dir.display());
    println!("serialized path: {}", config.serialized_dir().display());
}

/// Interactive loop; errors are printed and the loop carries on
fn shell(mut config: Config) -> staffdb::Result<()> {
    let stdin = io::stdin();
    let mut db = StaffDb::new(config.clone());

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let parsed = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        match parsed.command {
            ShellCommand::Record(command) => {
                if let Err(e) = run(&db, command) {
                    println!("{}", e);
                }
            }
            ShellCommand::Path { action: None } => print_path(&config),
            ShellCommand::Path {
                action: Some(PathAction::Set { dir }),
            } => {
                config.data_dir = dir;
                db = StaffDb::new(config.clone());
                println!("Path set to: '{}'", config.data_dir.display());
            }
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}
