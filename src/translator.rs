//! Alert classification and TVI line generation.
//!
//! The translation is a pure function of the lookup tables in
//! [`crate::tables`]: a Nagios `(state, service)` pair maps to a severity and
//! a msg id, which are formatted into the single line TVI consumes:
//!
//! ```text
//! <severity>: <domain>: <msg_id># <message>
//! ```

use tracing::debug;

use crate::{
    error::AdapterResult,
    sink::TviSink,
    tables::{DEGRADED_ALERT_SERVICES, FATAL_ALERT_SERVICES, MSG_IDS, SEVERITIES},
};

/// Msg id emitted for services with no entry in the msg-id table. Never
/// carries the `_ok` recovery suffix.
pub const UNKNOWN_MSG_ID: &str = "HADOOP_UNKNOWN_MSG";

/// TVI alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Degraded,
    Fatal,
}

impl Severity {
    /// The label TVI expects in the log line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
            Severity::Degraded => "Degraded",
            Severity::Fatal => "Fatal",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nagios attempt classification.
///
/// SOFT alerts are unconfirmed retry attempts and are suppressed to avoid
/// flapping noise; only HARD alerts reach the syslog. Any value other than
/// `HARD` is treated as SOFT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertType {
    Hard,
    Soft,
}

impl From<&str> for AlertType {
    fn from(value: &str) -> Self {
        if value == "HARD" { AlertType::Hard } else { AlertType::Soft }
    }
}

/// Determine the TVI severity from the Nagios alert state.
///
/// Unknown states default to `Warning`. A `Warning` for a service in the
/// degraded set becomes `Degraded`; otherwise any non-OK severity for a
/// service in the fatal set becomes `Fatal`. The degraded branch is checked
/// first, so a service listed in both sets never reaches `Fatal` from a
/// Warning-mapped state.
pub fn determine_severity(state: &str, service: &str) -> Severity {
    let severity = SEVERITIES.get(state).copied().unwrap_or(Severity::Warning);

    if severity == Severity::Warning && DEGRADED_ALERT_SERVICES.contains(service) {
        Severity::Degraded
    } else if severity != Severity::Ok && FATAL_ALERT_SERVICES.contains(service) {
        Severity::Fatal
    } else {
        severity
    }
}

/// Determine the msg id used to correlate the log line to a TVI rule.
///
/// A computed `OK` severity marks recovery, signalled with the `_ok` suffix.
pub fn determine_msg_id(service: &str, severity: Severity) -> String {
    match MSG_IDS.get(service) {
        Some(msg_id) if severity == Severity::Ok => format!("{msg_id}_ok"),
        Some(msg_id) => (*msg_id).to_string(),
        None => UNKNOWN_MSG_ID.to_string(),
    }
}

/// The TVI domain. Currently always `Hadoop`.
pub fn determine_domain() -> &'static str {
    "Hadoop"
}

/// Translate one Nagios alert into a TVI syslog line.
///
/// Only HARD alerts produce output; everything else returns without writing.
/// `attempt` is part of the Nagios event-handler argument contract but plays
/// no role in the translation.
pub fn generate_tvi_log_msg<S: TviSink>(
    alert_type: AlertType,
    attempt: &str,
    state: &str,
    service: &str,
    msg: &str,
    sink: &mut S,
) -> AdapterResult<()> {
    let _ = attempt;

    let severity = determine_severity(state, service);
    let domain = determine_domain();
    let msg_id = determine_msg_id(service, severity);

    if alert_type != AlertType::Hard {
        debug!(state, service, "suppressing non-HARD alert");
        return Ok(());
    }

    debug!(%severity, %msg_id, service, "logging HARD alert");
    sink.log(&format!("{severity}: {domain}: {msg_id}# {msg}"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[derive(Default)]
    struct MemorySink {
        lines: Vec<String>,
    }

    impl TviSink for MemorySink {
        fn log(&mut self, msg: &str) -> AdapterResult<()> {
            self.lines.push(msg.to_string());
            Ok(())
        }
    }

    #[rstest]
    #[case("UP", "Host::Ping", Severity::Ok)]
    #[case("OK", "UNLISTED::Something", Severity::Ok)]
    #[case("DOWN", "Host::Ping", Severity::Critical)]
    #[case("UNREACHABLE", "Host::Ping", Severity::Critical)]
    #[case("UNKNOWN", "UNLISTED::Something", Severity::Warning)]
    #[case("FOOBAR", "X::Y", Severity::Warning)]
    #[case("CRITICAL", "UNLISTED::Something", Severity::Critical)]
    fn test_determine_severity_base_cases(
        #[case] state: &str,
        #[case] service: &str,
        #[case] expected: Severity,
    ) {
        assert_eq!(determine_severity(state, service), expected);
    }

    #[rstest]
    #[case("HBASEMASTER::HBase Master CPU utilization")]
    #[case("HDFS::NameNode RPC latency")]
    #[case("MAPREDUCE::JobTracker RPC latency")]
    #[case("JOBTRACKER::JobTracker CPU utilization")]
    fn test_warning_escalates_to_degraded(#[case] service: &str) {
        assert_eq!(determine_severity("WARNING", service), Severity::Degraded);
    }

    #[test]
    fn test_non_ok_escalates_to_fatal() {
        let service = "NAMENODE::NameNode process down";
        assert_eq!(determine_severity("CRITICAL", service), Severity::Fatal);
        assert_eq!(determine_severity("WARNING", service), Severity::Fatal);
        // Recovery is not escalated.
        assert_eq!(determine_severity("OK", service), Severity::Ok);
    }

    #[test]
    fn test_degraded_escalation_wins_over_fatal_for_warnings() {
        // The degraded branch consumes the Warning case before the fatal
        // check runs, so the escalations stay mutually exclusive even for a
        // service that appears in both sets.
        let severity = determine_severity("WARNING", "HDFS::NameNode RPC latency");
        assert_eq!(severity, Severity::Degraded);
    }

    #[rstest]
    #[case("Host::Ping", Severity::Critical, "host_down")]
    #[case("Host::Ping", Severity::Ok, "host_down_ok")]
    #[case("NAMENODE::NameNode process down", Severity::Fatal, "namenode_process_down")]
    #[case("UNLISTED::X", Severity::Critical, "HADOOP_UNKNOWN_MSG")]
    #[case("UNLISTED::X", Severity::Ok, "HADOOP_UNKNOWN_MSG")]
    fn test_determine_msg_id(
        #[case] service: &str,
        #[case] severity: Severity,
        #[case] expected: &str,
    ) {
        assert_eq!(determine_msg_id(service, severity), expected);
    }

    #[test]
    fn test_domain_is_hadoop() {
        assert_eq!(determine_domain(), "Hadoop");
    }

    #[test]
    fn test_alert_type_parsing() {
        assert_eq!(AlertType::from("HARD"), AlertType::Hard);
        assert_eq!(AlertType::from("SOFT"), AlertType::Soft);
        // Nagios only ever sends HARD or SOFT, but anything unexpected is
        // treated as unconfirmed and suppressed.
        assert_eq!(AlertType::from("hard"), AlertType::Soft);
        assert_eq!(AlertType::from(""), AlertType::Soft);
    }

    #[test]
    fn test_soft_alert_writes_nothing() {
        let mut sink = MemorySink::default();
        generate_tvi_log_msg(
            AlertType::from("SOFT"),
            "1",
            "CRITICAL",
            "NAMENODE::NameNode process down",
            "msg",
            &mut sink,
        )
        .unwrap();
        assert!(sink.lines.is_empty());
    }

    #[test]
    fn test_hard_alert_logs_fatal_line() {
        let mut sink = MemorySink::default();
        generate_tvi_log_msg(
            AlertType::from("HARD"),
            "3",
            "CRITICAL",
            "NAMENODE::NameNode process down",
            "NameNode is down",
            &mut sink,
        )
        .unwrap();
        assert_eq!(
            sink.lines,
            vec!["Fatal: Hadoop: namenode_process_down# NameNode is down"]
        );
    }

    #[test]
    fn test_recovery_logs_ok_suffixed_msg_id() {
        let mut sink = MemorySink::default();
        generate_tvi_log_msg(
            AlertType::from("HARD"),
            "1",
            "UP",
            "Host::Ping",
            "host recovered",
            &mut sink,
        )
        .unwrap();
        assert_eq!(sink.lines, vec!["OK: Hadoop: host_down_ok# host recovered"]);
    }

    #[test]
    fn test_unknown_service_logs_sentinel_msg_id() {
        let mut sink = MemorySink::default();
        generate_tvi_log_msg(
            AlertType::from("HARD"),
            "1",
            "WARNING",
            "UNLISTED::Something",
            "odd",
            &mut sink,
        )
        .unwrap();
        assert_eq!(sink.lines, vec!["Warning: Hadoop: HADOOP_UNKNOWN_MSG# odd"]);
    }
}
