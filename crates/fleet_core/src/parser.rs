//! Record parser: turns comma-separated log lines into [`Event`]s.
//!
//! Each record carries six fields: `timestamp,vehicle_id,event_type,x,y,user_id`.
//! The user field holds the literal `NULL` when no user is attached. Records
//! that fail any conversion are skipped; the parser never aborts on bad data
//! and never reorders what it keeps. [`write_events`] produces the same format.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::{debug, info, warn};

use crate::error::{EventLogError, RecordError};
use crate::event::{Event, EventKind, Point};

const FIELD_COUNT: usize = 6;
const NULL_USER: &str = "NULL";

/// Convert one record into an event. Fields past the sixth are ignored.
pub fn parse_record(record: &StringRecord) -> Result<Event, RecordError> {
    if record.len() < FIELD_COUNT {
        return Err(RecordError::TooFewFields(record.len()));
    }
    let field = |idx: usize| record.get(idx).map(str::trim).unwrap_or_default();

    let timestamp = field(0)
        .parse::<i64>()
        .map_err(|_| RecordError::InvalidTimestamp(field(0).to_string()))?;

    let vehicle_id = field(1);
    if vehicle_id.is_empty() {
        return Err(RecordError::EmptyVehicleId);
    }

    let kind = field(2).parse::<EventKind>()?;
    let location = Point::new(parse_coordinate(field(3))?, parse_coordinate(field(4))?);

    let user_id = match field(5) {
        NULL_USER => None,
        user => Some(user.to_string()),
    };

    Ok(Event {
        timestamp,
        vehicle_id: vehicle_id.to_string(),
        kind,
        location,
        user_id,
    })
}

fn parse_coordinate(raw: &str) -> Result<f64, RecordError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| RecordError::InvalidCoordinate(raw.to_string()))
}

/// Parse a single line of the log.
pub fn parse_line(line: &str) -> Result<Event, RecordError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let record = StringRecord::from(line.split(',').collect::<Vec<_>>());
    parse_record(&record)
}

/// Parse every record from `reader`, keeping file order. Quotes carry no
/// meaning, so each line is one record and splits on every comma.
pub fn parse_events<R: Read>(reader: R) -> Vec<Event> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut events = Vec::new();
    let mut skipped = 0usize;
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) if err.is_io_error() => {
                warn!("stopped reading event log: {err}");
                break;
            }
            Err(err) => {
                skipped += 1;
                debug!("skipping unreadable record: {err}");
                continue;
            }
        };
        match parse_record(&record) {
            Ok(event) => events.push(event),
            Err(err) => {
                skipped += 1;
                let line = record.position().map(|pos| pos.line()).unwrap_or_default();
                debug!("skipping record on line {line}: {err}");
            }
        }
    }

    info!("parsed {} events, skipped {} records", events.len(), skipped);
    events
}

/// Parse an in-memory log.
pub fn parse_event_str(text: &str) -> Vec<Event> {
    parse_events(text.as_bytes())
}

/// Read and parse the log at `path`. Fails only when the file cannot be opened.
pub fn read_event_log(path: impl AsRef<Path>) -> Result<Vec<Event>, EventLogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| EventLogError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_events(file))
}

/// Like [`read_event_log`], but an unreadable file yields an empty log.
pub fn load_event_log(path: impl AsRef<Path>) -> Vec<Event> {
    read_event_log(path).unwrap_or_else(|err| {
        warn!("{err}; continuing with an empty event log");
        Vec::new()
    })
}

/// Write events in log format, one record per line, no header.
pub fn write_events<W: Write>(events: &[Event], writer: W) -> Result<(), EventLogError> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);
    for event in events {
        wtr.write_record([
            event.timestamp.to_string(),
            event.vehicle_id.clone(),
            event.kind.to_string(),
            event.location.x.to_string(),
            event.location.y.to_string(),
            event.user_id.clone().unwrap_or_else(|| NULL_USER.to_string()),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
