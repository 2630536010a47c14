use clap::{Args, Parser, Subcommand};
use std::time::Duration;

use super::parsers::{
    parse_duration_arg, parse_header, parse_ordering, parse_rate_schedule, parse_report_format,
    parse_timeout_arg,
};
use super::types::{Ordering, RateSchedule, ReportFormat};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Multi-rate HTTP load testing CLI - runs timed attack passes at one or more request rates and renders text, JSON, or CSV latency reports."
)]
pub struct BarrageArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run timed attack passes at each configured rate and render a report
    Attack(AttackArgs),
    /// Render a report from a previously recorded result stream
    Report(ReportArgs),
}

#[derive(Debug, Args, Clone)]
pub struct AttackArgs {
    /// One or more comma separated requests per second
    #[arg(long, value_parser = parse_rate_schedule)]
    pub rates: Option<RateSchedule>,

    /// Duration of each attack pass (supports ms/s/m/h)
    #[arg(long, default_value = "10s", value_parser = parse_duration_arg)]
    pub duration: Duration,

    /// Targets file ('stdin' reads from standard input)
    #[arg(long, default_value = "stdin")]
    pub targets: String,

    /// Attack ordering [sequential, random]
    #[arg(long, default_value = "random", value_parser = parse_ordering)]
    pub ordering: Ordering,

    /// Output file ('stdout' writes to standard output)
    #[arg(long, short = 'o', default_value = "stdout")]
    pub output: String,

    /// Number of redirects to follow
    #[arg(long, default_value_t = 10)]
    pub redirects: usize,

    /// Per-request timeout; 0 disables it (supports ms/s/m/h)
    #[arg(long, default_value = "0s", value_parser = parse_timeout_arg)]
    pub timeout: Duration,

    /// Targets request header in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Report format [text, json, csv, records]
    #[arg(long, default_value = "text", value_parser = parse_report_format)]
    pub reporter: ReportFormat,
}

#[derive(Debug, Args, Clone)]
pub struct ReportArgs {
    /// Results file in records format ('stdin' reads from standard input)
    #[arg(long, short = 'i', default_value = "stdin")]
    pub input: String,

    /// Output file ('stdout' writes to standard output)
    #[arg(long, short = 'o', default_value = "stdout")]
    pub output: String,

    /// Report format [text, json, csv]
    #[arg(long, default_value = "text", value_parser = parse_report_format)]
    pub reporter: ReportFormat,
}
