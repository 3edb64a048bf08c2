use clap::Parser;
use tracing_subscriber::EnvFilter;
use tvi_logger::{AlertType, SyslogSink, generate_tvi_log_msg};

/// Nagios event handler that logs Hadoop alerts to syslog for TVI correlation.
///
/// Invoked by Nagios with five positional arguments. HARD alerts are written
/// to the local syslog as `<severity>: <domain>: <msg_id># <message>`; SOFT
/// alerts exit silently with status 0.
#[derive(Parser, Debug)]
#[command(version, about = "Nagios to TVI syslog adapter", long_about = None)]
struct Args {
    /// Alert attempt classification: HARD alerts are logged, anything else is suppressed
    alert_type: String,

    /// Retry-attempt counter supplied by Nagios (accepted, unused)
    attempt: String,

    /// Host or service state keyword, e.g. UP, DOWN, WARNING, CRITICAL
    state: String,

    /// Service identifier in CATEGORY::description form
    service: String,

    /// Free-text alert message
    message: String,
}

fn main() {
    // Diagnostics go to stderr under RUST_LOG control; the TVI line itself is
    // written through the syslog transport, never through tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut sink = SyslogSink::new();

    if let Err(e) = generate_tvi_log_msg(
        AlertType::from(args.alert_type.as_str()),
        &args.attempt,
        &args.state,
        &args.service,
        &args.message,
        &mut sink,
    ) {
        eprintln!("Failed to log alert: {e}");
        std::process::exit(1);
    }
}
