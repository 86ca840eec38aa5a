use super::{
    error::{RecordError, Result},
    Record,
};
use log::{debug, info};
use pest::Parser;
use pest_derive::Parser;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

#[derive(Parser)]
#[grammar = "record/record.pest"]
struct RecordParser;

/// Parses one record line.
///
/// The last two fields are the source and the target users; everything
/// before them is the timestamp.
pub fn parse_record(input: &str) -> std::result::Result<Record, String> {
    let fields: Vec<&str> = RecordParser::parse(Rule::record, input)
        .map_err(|e| e.to_string())?
        .flat_map(|pair| pair.into_inner())
        .filter(|pair| pair.as_rule() == Rule::field)
        .map(|pair| pair.as_str().trim())
        .collect();
    match fields.len() {
        0 | 1 => Err(format!(
            "expected source and target users, found {} field(s)",
            fields.len()
        )),
        n => Ok(Record::new(
            fields[..n - 2].join(" "),
            fields[n - 2].to_string(),
            fields[n - 1].to_string(),
        )),
    }
}

/// Reads all records from `reader`, skipping blank lines.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            debug!("skipping blank line {}", i + 1);
            continue;
        }
        records.push(parse_record(&line).map_err(|message| RecordError::Parse {
            line: i + 1,
            message,
        })?);
    }
    Ok(records)
}

/// Reads all records of the file at `path`.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let records = parse_records(BufReader::new(File::open(path)?))?;
    info!("read {} records from {}", records.len(), path.display());
    Ok(records)
}
