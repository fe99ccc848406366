use crate::check::{Evaluation, Thresholds, evaluate};
use crate::error::CollectionError;
use crate::system::MetricsSource;

/// One full pass: read memory, read swap, classify.
///
/// A failed read aborts the pass before anything is evaluated.
pub fn run_probe<S: MetricsSource + ?Sized>(
    source: &mut S,
    thresholds: &Thresholds,
) -> Result<Evaluation, CollectionError> {
    let memory = source.read_memory()?;
    let swap = source.read_swap()?;
    Ok(evaluate(&memory, &swap, thresholds))
}
