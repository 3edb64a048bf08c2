//! TVI line sinks.
//!
//! The sink trait is the seam between classification and transport: the
//! translator is exercised against an in-memory sink in tests, while the
//! binary wires in [`SyslogSink`].

use syslog::{Facility, Formatter3164};

use crate::error::AdapterResult;

/// Destination for formatted TVI lines.
pub trait TviSink {
    /// Write one line.
    fn log(&mut self, msg: &str) -> AdapterResult<()>;
}

/// Writes TVI lines to the local syslog daemon under the `Hadoop` process
/// identity, tagged with the pid of this process.
///
/// Each invocation of the adapter writes at most one line, so the socket is
/// opened per write rather than held open. A connect or write failure
/// propagates unchanged; there is no retry and no fallback sink.
#[derive(Debug, Default)]
pub struct SyslogSink;

impl SyslogSink {
    pub fn new() -> Self {
        Self
    }
}

impl TviSink for SyslogSink {
    fn log(&mut self, msg: &str) -> AdapterResult<()> {
        let formatter = Formatter3164 {
            facility: Facility::LOG_USER,
            hostname: None,
            process: "Hadoop".into(),
            pid: std::process::id(),
        };

        let mut writer = syslog::unix(formatter)?;
        writer.info(msg.to_string())?;
        Ok(())
    }
}
