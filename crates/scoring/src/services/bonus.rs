use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{parse_time_to_seconds, Event, EventRecords, EventResult, ScoringConfig};

/// Awards record bonuses to eligible individual results.
///
/// The displayed time has to strictly beat a record to earn its amount, and
/// the amounts of every record beaten add up.
pub fn apply_record_bonuses(
    results: Vec<EventResult>,
    event: &Event,
    config: &ScoringConfig,
    reference_year: i32,
) -> Vec<EventResult> {
    let Some(records) = event.records.as_ref() else {
        return results;
    };
    if !config.bonus_points.enabled || event.is_relay || records.is_empty() {
        return results;
    }

    results
        .into_iter()
        .map(|result| {
            let bonus = record_bonus(&result, records, config, reference_year);
            if bonus > Decimal::ZERO {
                debug!(
                    "Event {}: {} earns {} bonus points",
                    event.number, result.time, bonus
                );
            }
            EventResult {
                bonus_points: bonus,
                ..result
            }
        })
        .collect()
}

fn record_bonus(
    result: &EventResult,
    records: &EventRecords,
    config: &ScoringConfig,
    reference_year: i32,
) -> Decimal {
    if result.disqualified || !(result.open_eligible || result.category_eligible) {
        return Decimal::ZERO;
    }

    let Ok(time) = parse_time_to_seconds(&result.time) else {
        return Decimal::ZERO;
    };

    let age_best = result
        .swimmer
        .as_ref()
        .and_then(|swimmer| swimmer.age_in(reference_year))
        .and_then(|age| records.age_bests.get(&age).copied());

    let amounts = &config.bonus_points;
    [
        (records.championship, amounts.championship_record),
        (records.regional, amounts.absolute_regional),
        (records.national, amounts.national_best),
        (age_best, amounts.regional_best),
    ]
    .into_iter()
    .filter_map(|(record, amount)| record.filter(|mark| time < *mark).map(|_| amount))
    .sum()
}
