//! Subject identifiers must not reach the log unless explicitly allowed.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use bids_model::{MetadataBatch, MetadataRecord, fields};
use bids_rules::logging::{LogConfig, LogFormat, REDACTED_VALUE, init_logging_with_writer};
use bids_rules::{DefaultRules, RuleSet};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn subject_is_redacted_in_trace_events() {
    let captured = Captured::default();
    let config = LogConfig::default()
        .with_level(Level::TRACE)
        .with_format(LogFormat::Compact)
        .with_ansi(false)
        .with_env_override(false);
    init_logging_with_writer(&config, captured.clone()).unwrap();

    let batch: MetadataBatch = [MetadataRecord::new()
        .with(fields::SERIES_DESCRIPTION, "T1w")
        .with(fields::PROTOCOL_NAME, "anat_t1w")
        .with(fields::PATIENT_ID, "confidential42")]
    .into_iter()
    .collect();
    DefaultRules::new(&batch).apply().unwrap();

    let output = captured.contents();
    assert!(output.contains("Series specified"), "missing trace event: {output}");
    assert!(output.contains(REDACTED_VALUE));
    assert!(!output.contains("confidential42"));

    // A second global subscriber is refused.
    assert!(init_logging_with_writer(&config, captured).is_err());
}
