//! Nagios → TVI syslog adapter.
//!
//! A Nagios event handler invokes this program once per alert with five
//! positional arguments: alert type (`HARD`/`SOFT`), attempt counter, state
//! keyword, service identifier, and free-text message. HARD alerts are
//! classified through static lookup tables and written to the local syslog
//! as a single line the TVI correlation backend consumes:
//!
//! ```text
//! <severity>: <domain>: <msg_id># <message>
//! ```
//!
//! SOFT alerts are suppressed. There is no state, no retry, and no other
//! output: each process performs one classification, at most one syslog
//! write, and exits.

pub mod error;
pub mod sink;
mod tables;
pub mod translator;

pub use error::{AdapterError, AdapterResult};
pub use sink::{SyslogSink, TviSink};
pub use translator::{
    AlertType, Severity, UNKNOWN_MSG_ID, determine_domain, determine_msg_id, determine_severity,
    generate_tvi_log_msg,
};
