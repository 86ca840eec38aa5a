use clap::{
    crate_authors, crate_description, crate_name, crate_version, App, Arg, ArgMatches, ErrorKind,
};
use derive_more::Display;
use log::error;
use peaktraffic::{graph::Reciprocity, record::read_records, report::pretty_print, task::Task};
use std::{error::Error, path::Path, process};

/// Exit code when no input path is given.
const NO_FILE_PROVIDED: i32 = 10;
/// Exit code when more than one input path is given.
const TOO_MANY_ARGUMENTS: i32 = 20;
/// Exit code for an input path that does not exist.
const NO_VALID_PATH: i32 = 30;

#[derive(Debug, Display, PartialEq)]
enum Err {
    InvalidMinSize(String),
}

impl std::error::Error for Err {}

fn handle_find(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let input = matches.value_of("INPUT").unwrap_or_default();
    if !Path::new(input).exists() {
        error!("the provided path does not exist: {}", input);
        process::exit(NO_VALID_PATH);
    }
    let min_size = match matches.value_of("min-size") {
        Some(n) => n
            .parse()
            .map_err(|_| Err::InvalidMinSize(String::from(n)))?,
        None => peaktraffic::report::MIN_CLUSTER_SIZE,
    };
    let reciprocity = if matches.is_present("strict") {
        Reciprocity::Mutual
    } else {
        Reciprocity::AnyOutgoing
    };
    let clusters = Task::new(read_records(input)?)
        .reciprocity(reciprocity)
        .min_size(min_size)
        .biggest_only(matches.is_present("biggest"))
        .run()?;
    for cluster in clusters {
        println!("{}", pretty_print(&cluster));
    }
    Ok(())
}

/// Maps the argument errors with a dedicated exit code.
fn exit_code(kind: ErrorKind) -> Option<i32> {
    match kind {
        ErrorKind::MissingRequiredArgument => Some(NO_FILE_PROVIDED),
        ErrorKind::UnknownArgument | ErrorKind::TooManyValues => Some(TOO_MANY_ARGUMENTS),
        _ => None,
    }
}

fn app() -> App<'static, 'static> {
    App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::with_name("INPUT")
                .help("Communication log, one `timestamp   source   target` record per line")
                .required(true),
        )
        .arg(
            Arg::with_name("min-size")
                .help("Minimum number of users of a reported cluster [default: 3]")
                .long("min-size")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("biggest")
                .help("Reports only the clusters of maximum size")
                .long("biggest")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("strict")
                .help("Keeps a connection only if the target user connects back to the source")
                .long("strict")
                .takes_value(false),
        )
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = app().get_matches_safe().unwrap_or_else(|e| match exit_code(e.kind) {
        Some(code) => {
            error!("{}", e.message);
            process::exit(code);
        }
        None => e.exit(),
    });
    handle_find(&matches)
}
