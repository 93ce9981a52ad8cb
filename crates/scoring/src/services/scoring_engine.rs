use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::bonus::apply_record_bonuses;
use super::category::category_for_birth_year;
use super::standings::{calculate_club_standings, calculate_swimmer_standings};
use crate::models::{
    Event, EventResult, Gender, Meet, OPEN_CATEGORY, ScoredMeet, ScoringConfig, StatusReason,
};

/// Times closer than this share a rank.
pub const TIE_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

/// Scores every event of the meet and rebuilds both standings tables.
///
/// The meet is only read: running this twice with the same config and
/// reference year gives identical output.
pub fn score_meet(meet: &Meet, config: &ScoringConfig, reference_year: i32) -> ScoredMeet {
    let events: Vec<Event> = meet
        .events
        .iter()
        .map(|event| score_event(event, config, reference_year))
        .collect();

    let club_standings = calculate_club_standings(&events);
    let swimmer_standings = calculate_swimmer_standings(&events);

    info!(
        "Scored {} events with '{}': {} clubs, {} swimmers",
        events.len(),
        config.id,
        club_standings.len(),
        swimmer_standings.len()
    );

    ScoredMeet {
        name: meet.name.clone(),
        date: meet.date,
        scoring_config_id: config.id.clone(),
        reference_year,
        events,
        club_standings,
        swimmer_standings,
    }
}

/// Scores one event, returning a new event whose results carry ranks,
/// eligibility and points. Identity fields are copied unchanged.
pub fn score_event(event: &Event, config: &ScoringConfig, reference_year: i32) -> Event {
    let ctx = EventContext {
        event,
        config,
        scale: point_scale(event, config),
        reference_year,
    };

    let results = event.results.iter().map(EventResult::unscored).collect();
    let results = rank_pass(results);
    let results = assign_categories(results, &ctx);
    let results = open_ranking_pass(results, &ctx);
    let results = category_ranking_pass(results, &ctx);
    let results = split_open_ties(results, ctx.scale);
    let results = apply_record_bonuses(results, event, config, reference_year);

    debug!(
        "Event {} ({}): {} results, {} open-eligible, {} category-eligible",
        event.number,
        event.display_name(),
        results.len(),
        results.iter().filter(|r| r.open_eligible).count(),
        results.iter().filter(|r| r.category_eligible).count()
    );

    Event {
        results,
        ..event.clone()
    }
}

struct EventContext<'a> {
    event: &'a Event,
    config: &'a ScoringConfig,
    scale: &'a [Decimal],
    reference_year: i32,
}

/// Relays look up the special table for their `legs x distance` first.
pub fn point_scale<'a>(event: &Event, config: &'a ScoringConfig) -> &'a [Decimal] {
    if event.is_relay {
        config
            .special_relay_points
            .get(&event.relay_key())
            .unwrap_or(&config.relay_points)
    } else {
        &config.individual_points
    }
}

fn slot_value(scale: &[Decimal], slot: usize) -> Decimal {
    scale.get(slot).copied().unwrap_or(Decimal::ZERO)
}

/// Per-ranking quota counter keyed by (club, gender).
struct ClubQuota {
    limit: Option<u32>,
    counts: HashMap<(String, Gender), u32>,
}

impl ClubQuota {
    fn new(limit: Option<u32>) -> Self {
        Self {
            limit,
            counts: HashMap::new(),
        }
    }

    /// Takes a seat for the club, or returns false when the quota is full.
    fn try_admit(&mut self, club_id: &str, gender: Gender) -> bool {
        let Some(limit) = self.limit else {
            return true;
        };

        let count = self.counts.entry((club_id.to_string(), gender)).or_insert(0);
        if *count >= limit {
            false
        } else {
            *count += 1;
            true
        }
    }
}

/// Result of one ranking for one result.
#[derive(Debug, Clone, Copy)]
struct RankingOutcome {
    status: StatusReason,
    points: Decimal,
}

impl RankingOutcome {
    fn eligible(&self) -> bool {
        self.status == StatusReason::Ok
    }
}

/// Walks results through one ranking, handing out scale slots in order.
struct SlotCursor<'a> {
    scale: &'a [Decimal],
    next_slot: usize,
    redistribute: bool,
}

impl<'a> SlotCursor<'a> {
    fn new(scale: &'a [Decimal], redistribute: bool) -> Self {
        Self {
            scale,
            next_slot: 0,
            redistribute,
        }
    }

    fn settle(&mut self, status: StatusReason) -> RankingOutcome {
        let points = match status {
            StatusReason::Ok => {
                let points = slot_value(self.scale, self.next_slot);
                self.next_slot += 1;
                points
            }
            StatusReason::ClubLimit if !self.redistribute => {
                self.next_slot += 1;
                Decimal::ZERO
            }
            _ => Decimal::ZERO,
        };

        RankingOutcome { status, points }
    }
}

fn rank_pass(results: Vec<EventResult>) -> Vec<EventResult> {
    let mut rank = 1u32;
    let mut previous: Option<Decimal> = None;

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| {
            if let Some(prev) = previous {
                if (result.time_in_seconds - prev).abs() > TIE_TOLERANCE {
                    rank = index as u32 + 1;
                }
            }
            previous = Some(result.time_in_seconds);

            EventResult {
                position: rank,
                ..result
            }
        })
        .collect()
}

fn assign_categories(results: Vec<EventResult>, ctx: &EventContext<'_>) -> Vec<EventResult> {
    if ctx.event.is_relay {
        return results;
    }

    results
        .into_iter()
        .map(|result| {
            let swimmer_category = result.swimmer.as_ref().and_then(|swimmer| {
                category_for_birth_year(
                    swimmer.birth_year,
                    ctx.reference_year,
                    &ctx.config.categories,
                )
            });

            EventResult {
                swimmer_category,
                ..result
            }
        })
        .collect()
}

fn age_of(result: &EventResult, reference_year: i32) -> Option<i32> {
    result
        .swimmer
        .as_ref()
        .and_then(|swimmer| swimmer.age_in(reference_year))
}

fn meets_open_qualifying_time(result: &EventResult, ctx: &EventContext<'_>) -> bool {
    let Some(open) = ctx
        .event
        .qualifying_times
        .as_ref()
        .and_then(|qt| qt.open)
    else {
        return true;
    };

    if result.time_in_seconds <= open {
        return true;
    }

    // 19 and 20 year olds still score in the open ranking on their own age time.
    match age_of(result, ctx.reference_year) {
        Some(age @ (19 | 20)) => ctx
            .event
            .qualifying_times
            .as_ref()
            .and_then(|qt| qt.for_age(age))
            .is_some_and(|age_time| result.time_in_seconds <= age_time),
        _ => false,
    }
}

fn meets_age_qualifying_time(result: &EventResult, ctx: &EventContext<'_>) -> bool {
    let age_time = age_of(result, ctx.reference_year).and_then(|age| {
        ctx.event
            .qualifying_times
            .as_ref()
            .and_then(|qt| qt.for_age(age))
    });

    age_time.is_none_or(|limit| result.time_in_seconds <= limit)
}

fn open_ranking_pass(results: Vec<EventResult>, ctx: &EventContext<'_>) -> Vec<EventResult> {
    let mut quota = ClubQuota::new(ctx.config.max_swimmers_per_club_per_event);
    let mut cursor = SlotCursor::new(ctx.scale, ctx.config.redistribute_excess_points);

    results
        .into_iter()
        .map(|result| {
            if result.disqualified {
                return EventResult {
                    open_status: Some(StatusReason::Dq),
                    category_status: Some(StatusReason::Dq),
                    ..result
                };
            }

            let permitted = result
                .swimmer_category
                .as_deref()
                .is_none_or(|category| ctx.config.can_score_in(category, OPEN_CATEGORY));

            let status = if !permitted {
                StatusReason::CategoryRule
            } else if !meets_open_qualifying_time(&result, ctx) {
                StatusReason::TimeLimit
            } else if !quota.try_admit(&result.club.id, ctx.event.gender) {
                StatusReason::ClubLimit
            } else {
                StatusReason::Ok
            };

            let outcome = cursor.settle(status);

            EventResult {
                open_eligible: outcome.eligible(),
                open_status: Some(outcome.status),
                open_points: outcome.points,
                ..result
            }
        })
        .collect()
}

fn category_ranking_pass(results: Vec<EventResult>, ctx: &EventContext<'_>) -> Vec<EventResult> {
    let mut outcomes: HashMap<usize, RankingOutcome> = HashMap::new();

    for category in ctx
        .config
        .categories
        .iter()
        .filter(|c| c.id != OPEN_CATEGORY)
    {
        let mut quota = ClubQuota::new(ctx.config.max_swimmers_per_club_per_event);
        let mut cursor = SlotCursor::new(ctx.scale, ctx.config.redistribute_excess_points);

        let members = results.iter().enumerate().filter(|(_, r)| {
            !r.disqualified && r.swimmer_category.as_deref() == Some(category.id.as_str())
        });

        for (index, result) in members {
            let status = if !ctx.config.can_score_in(&category.id, &category.id) {
                StatusReason::CategoryRule
            } else if !meets_age_qualifying_time(result, ctx) {
                StatusReason::TimeLimit
            } else if !quota.try_admit(&result.club.id, ctx.event.gender) {
                StatusReason::ClubLimit
            } else {
                StatusReason::Ok
            };

            outcomes.insert(index, cursor.settle(status));
        }
    }

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match outcomes.get(&index) {
            Some(outcome) => EventResult {
                category_eligible: outcome.eligible(),
                category_status: Some(outcome.status),
                category_points: outcome.points,
                ..result
            },
            None => result,
        })
        .collect()
}

/// Shares the scale values of a tied run's rank positions evenly among its
/// open-eligible members.
///
/// Positions past the end of the scale contribute zero, so every tied member
/// still gets the same share. Shares are kept unrounded.
fn split_open_ties(results: Vec<EventResult>, scale: &[Decimal]) -> Vec<EventResult> {
    let mut shares: HashMap<usize, Decimal> = HashMap::new();

    let mut start = 0;
    while start < results.len() {
        let rank = results[start].position;
        let end = results[start..]
            .iter()
            .position(|r| r.position != rank)
            .map_or(results.len(), |offset| start + offset);

        let eligible: Vec<usize> = (start..end).filter(|&i| results[i].open_eligible).collect();

        if end - start > 1 && eligible.len() > 1 {
            let first_slot = rank.saturating_sub(1) as usize;
            let total: Decimal = (first_slot..first_slot + eligible.len())
                .map(|slot| slot_value(scale, slot))
                .sum();
            let share = total / Decimal::from(eligible.len());

            for &index in &eligible {
                shares.insert(index, share);
            }
        }

        start = end;
    }

    if shares.is_empty() {
        return results;
    }

    results
        .into_iter()
        .enumerate()
        .map(|(index, result)| match shares.get(&index) {
            Some(points) => EventResult {
                open_points: *points,
                ..result
            },
            None => result,
        })
        .collect()
}
