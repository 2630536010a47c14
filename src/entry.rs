use clap::Parser;
use tracing::info;

use crate::args::{AttackArgs, BarrageArgs, Command, ReportArgs};
use crate::attack::{AttackPlan, Attacker, run_schedule};
use crate::error::{AppError, AppResult, FileError, ValidationError};
use crate::logger;
use crate::output;
use crate::report;
use crate::targets;

pub(crate) fn run() -> AppResult<()> {
    let args = BarrageArgs::parse();
    logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match args.command {
        Command::Attack(attack_args) => runtime.block_on(run_attack(attack_args)),
        Command::Report(report_args) => runtime.block_on(run_report(report_args)),
    }
}

async fn run_attack(args: AttackArgs) -> AppResult<()> {
    let schedule = args
        .rates
        .ok_or_else(|| AppError::validation(ValidationError::RatesEmpty))?;

    let content = read_source(&args.targets).map_err(|err| {
        AppError::file(FileError::TargetsOpen {
            name: args.targets.clone(),
            source: err,
        })
    })?;
    let mut target_list = targets::read_targets(&args.targets, &content)?;

    output::ensure_writable(&args.output).await?;

    let plan = AttackPlan {
        schedule,
        duration: args.duration,
        ordering: args.ordering,
        headers: targets::header_set(&args.headers)?,
    };
    let engine = Attacker::new(args.redirects, args.timeout)?;
    let hits = run_schedule(&engine, &plan, &mut target_list).await?;

    info!("Writing {} report to '{}'...", args.reporter.as_str(), args.output);
    let bytes = report::render(args.reporter, &hits)?;
    output::write_report(&args.output, &bytes).await
}

async fn run_report(args: ReportArgs) -> AppResult<()> {
    let content = read_source(&args.input).map_err(|err| {
        AppError::file(FileError::InputOpen {
            name: args.input.clone(),
            source: err,
        })
    })?;
    let hits = report::records::read_hits(&content)?;
    let bytes = report::render(args.reporter, &hits)?;
    output::write_report(&args.output, &bytes).await
}

/// Read a source argument: the `stdin` sentinel or a file path.
fn read_source(name: &str) -> Result<String, std::io::Error> {
    if name == "stdin" {
        std::io::read_to_string(std::io::stdin())
    } else {
        std::fs::read_to_string(name)
    }
}
