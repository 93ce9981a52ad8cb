use rust_decimal::Decimal;

use crate::models::EventResult;

/// Smallest step between two adjusted times.
pub const VIRTUAL_TIME_STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Forces comparison times to follow declared order.
///
/// Results must be in declared order. Walking from the last result up, any
/// result slower than the one below it gets `next - 0.01`. The displayed time
/// text is never touched.
pub fn apply_virtual_times(results: &mut [EventResult]) {
    for i in (0..results.len().saturating_sub(1)).rev() {
        let next = results[i + 1].time_in_seconds;
        if results[i].time_in_seconds > next {
            results[i].time_in_seconds = next - VIRTUAL_TIME_STEP;
        }
    }
}
