use std::time::{Duration, SystemTime, UNIX_EPOCH};

use http::HeaderMap;
use tracing::info;

use super::AttackEngine;
use crate::args::{Ordering, RateSchedule};
use crate::error::{AppError, AppResult, ValidationError};
use crate::metrics::Hit;
use crate::targets::{self, Target};

/// Everything a schedule run needs besides the engine and the targets.
#[derive(Debug, Clone)]
pub struct AttackPlan {
    pub schedule: RateSchedule,
    pub duration: Duration,
    pub ordering: Ordering,
    pub headers: HeaderMap,
}

/// Run one attack pass per scheduled rate, strictly in order, accumulating
/// a single rate-tagged hit sequence.
///
/// Before each pass the rate and duration are validated, the configured
/// header set is applied to every target, and random ordering reshuffles
/// the list with a fresh time seed. Each pass's hits are tagged with its
/// rate and appended whole, so same-rate hits stay contiguous. The first
/// failure aborts the remaining rates and discards everything accumulated
/// so far.
///
/// # Errors
///
/// Returns a validation error for a zero rate or zero duration, or
/// whatever error the engine's pass failed with.
pub async fn run_schedule<E>(
    engine: &E,
    plan: &AttackPlan,
    targets: &mut Vec<Target>,
) -> AppResult<Vec<Hit>>
where
    E: AttackEngine + Sync,
{
    let mut results: Vec<Hit> = Vec::new();
    for &rate in plan.schedule.rates() {
        if rate == 0 {
            return Err(AppError::validation(ValidationError::RateZero));
        }
        if plan.duration.is_zero() {
            return Err(AppError::validation(ValidationError::DurationZero));
        }

        for target in targets.iter_mut() {
            target.apply_headers(&plan.headers);
        }
        match plan.ordering {
            Ordering::Random => targets::shuffle(targets, time_seed()),
            Ordering::Sequential => {}
        }

        info!(
            "Attacking {} targets in {} order for {:?} at {} requests/sec...",
            targets.len(),
            plan.ordering.as_str(),
            plan.duration,
            rate
        );
        let mut hits = engine.attack(targets, rate, plan.duration).await?;
        for hit in &mut hits {
            hit.rate = rate;
        }
        results.append(&mut hits);
        info!("Pass at {} requests/sec done", rate);
    }
    Ok(results)
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
