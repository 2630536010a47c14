use crate::error::{AppError, AppResult, ReportError};
use crate::metrics::{Hit, Metrics};

pub(super) fn render(hits: &[Hit]) -> AppResult<Vec<u8>> {
    serde_json::to_vec(&Metrics::compute(hits))
        .map_err(|err| AppError::report(ReportError::Serialize { source: err }))
}
