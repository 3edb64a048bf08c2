//! Static classification tables.
//!
//! These are config-as-code: built on first use, never mutated, discarded at
//! process exit. Entries follow the Hadoop monitoring configuration that the
//! downstream TVI rules are written against, so renaming a service here
//! silently breaks rule correlation.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::translator::Severity;

/// Nagios state keyword to base TVI severity. States absent from this table
/// are treated as `Warning`.
pub(crate) static SEVERITIES: Lazy<HashMap<&'static str, Severity>> = Lazy::new(|| {
    HashMap::from([
        ("UP", Severity::Ok),
        ("DOWN", Severity::Critical),
        ("UNREACHABLE", Severity::Critical),
        ("OK", Severity::Ok),
        ("WARNING", Severity::Warning),
        ("UNKNOWN", Severity::Warning),
        ("CRITICAL", Severity::Critical),
    ])
});

/// Services whose `Warning` alerts are raised to `Degraded`.
pub(crate) static DEGRADED_ALERT_SERVICES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "HBASEMASTER::HBase Master CPU utilization",
        "HDFS::NameNode RPC latency",
        "MAPREDUCE::JobTracker RPC latency",
        "JOBTRACKER::JobTracker CPU utilization",
    ])
});

/// Services whose non-OK alerts are raised to `Fatal`.
pub(crate) static FATAL_ALERT_SERVICES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["NAMENODE::NameNode process down"]));

/// Service identifier to the msg id that correlates a syslog line to a TVI
/// rule. The four Ganglia collector alerts deliberately share one msg id.
pub(crate) static MSG_IDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Host::Ping", "host_down"),
        ("HBASEMASTER::HBase Master CPU utilization", "master_cpu_utilization"),
        ("HDFS::HDFS capacity utilization", "hdfs_percent_capacity"),
        ("HDFS::Corrupt/Missing blocks", "hdfs_block"),
        ("NAMENODE::NameNode edit logs directory status", "namenode_edit_log_write"),
        ("HDFS::Percent DataNodes down", "datanode_down"),
        ("DATANODE::DataNode process down", "datanode_process_down"),
        ("HDFS::Percent DataNodes storage full", "datanodes_percent_storage_full"),
        ("NAMENODE::NameNode process down", "namenode_process_down"),
        ("HDFS::NameNode RPC latency", "namenode_rpc_latency"),
        ("DATANODE::DataNode storage full", "datanodes_storage_full"),
        ("JOBTRACKER::JobTracker process down", "jobtracker_process_down"),
        ("MAPREDUCE::JobTracker RPC latency", "jobtracker_rpc_latency"),
        ("MAPREDUCE::Percent TaskTrackers down", "tasktrackers_down"),
        ("TASKTRACKER::TaskTracker process down", "tasktracker_process_down"),
        ("HBASEMASTER::HBase Master process down", "hbasemaster_process_down"),
        ("REGIONSERVER::RegionServer process down", "regionserver_process_down"),
        ("HBASE::Percent RegionServers down", "regionservers_down"),
        ("HIVE-METASTORE::Hive Metastore status check", "hive_metastore_process_down"),
        ("ZOOKEEPER::Percent ZooKeeper Servers down", "zookeepers_down"),
        ("ZOOKEEPER::ZooKeeper Server process down", "zookeeper_process_down"),
        ("OOZIE::Oozie Server status check", "oozie_down"),
        ("WEBHCAT::WebHCat Server status check", "templeton_down"),
        ("PUPPET::Puppet agent down", "puppet_down"),
        ("NAGIOS::Nagios status log staleness", "nagios_status_log_stale"),
        ("GANGLIA::Ganglia [gmetad] process down", "ganglia_process_down"),
        (
            "GANGLIA::Ganglia Collector [gmond] process down alert for HBase Master",
            "ganglia_collector_process_down",
        ),
        (
            "GANGLIA::Ganglia Collector [gmond] process down alert for JobTracker",
            "ganglia_collector_process_down",
        ),
        (
            "GANGLIA::Ganglia Collector [gmond] process down alert for NameNode",
            "ganglia_collector_process_down",
        ),
        (
            "GANGLIA::Ganglia Collector [gmond] process down alert for slaves",
            "ganglia_collector_process_down",
        ),
        ("NAMENODE::Secondary NameNode process down", "secondary_namenode_process_down"),
        ("JOBTRACKER::JobTracker CPU utilization", "jobtracker_cpu_utilization"),
        ("HBASEMASTER::HBase Master Web UI down", "hbase_ui_down"),
        ("NAMENODE::NameNode Web UI down", "namenode_ui_down"),
        ("JOBTRACKER::JobHistory Web UI down", "jobhistory_ui_down"),
        ("JOBTRACKER::JobTracker Web UI down", "jobtracker_ui_down"),
    ])
});
