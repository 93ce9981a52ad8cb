use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::models::{ClubStanding, Event, SwimmerEventSummary, SwimmerStanding};

/// Club table over every scored event, highest total first.
///
/// Medals come from the order of open-eligible results only, so a swimmer who
/// scores solely in a category ranking does not take a podium spot.
pub fn calculate_club_standings(events: &[Event]) -> Vec<ClubStanding> {
    let mut standings: Vec<ClubStanding> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();
    let mut swimmers_of: HashMap<String, HashSet<String>> = HashMap::new();

    for event in events {
        let mut podium = event.results.iter().filter(|r| r.open_eligible);
        let medalists: Vec<_> = (0..3).filter_map(|_| podium.next()).collect();

        for result in &event.results {
            let slot = *index_of.entry(result.club.id.clone()).or_insert_with(|| {
                standings.push(ClubStanding::new(Arc::clone(&result.club)));
                standings.len() - 1
            });
            let standing = &mut standings[slot];

            let open = if result.open_eligible && result.open_points > Decimal::ZERO {
                result.open_points
            } else {
                Decimal::ZERO
            };
            let points = open + result.category_points + result.bonus_points;

            if event.is_relay {
                standing.relay_points += points;
            } else {
                standing.individual_points += points;
            }
            standing.bonus_points += result.bonus_points;
            standing.total_points += points;
            if points > Decimal::ZERO {
                standing.event_count += 1;
            }

            match medalists.iter().position(|m| std::ptr::eq(*m, result)) {
                Some(0) => standing.gold_medals += 1,
                Some(1) => standing.silver_medals += 1,
                Some(2) => standing.bronze_medals += 1,
                _ => {}
            }

            if let (false, Some(swimmer)) = (event.is_relay, result.swimmer.as_ref()) {
                swimmers_of
                    .entry(result.club.id.clone())
                    .or_default()
                    .insert(swimmer.id.clone());
            }
        }
    }

    for standing in &mut standings {
        standing.swimmer_count = swimmers_of
            .get(&standing.club.id)
            .map_or(0, |swimmers| swimmers.len() as u32);
    }

    standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    standings
}

/// Swimmer table over individual events, highest total first.
pub fn calculate_swimmer_standings(events: &[Event]) -> Vec<SwimmerStanding> {
    let mut standings: Vec<SwimmerStanding> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();
    let mut declared_sum: HashMap<String, u32> = HashMap::new();

    for event in events.iter().filter(|e| !e.is_relay) {
        for result in &event.results {
            let Some(swimmer) = result.swimmer.as_ref() else {
                continue;
            };

            let slot = *index_of.entry(swimmer.id.clone()).or_insert_with(|| {
                standings.push(SwimmerStanding::new(
                    Arc::clone(swimmer),
                    Arc::clone(&result.club),
                ));
                standings.len() - 1
            });
            let standing = &mut standings[slot];

            standing.open_points += result.open_points;
            standing.category_points += result.category_points;
            standing.bonus_points += result.bonus_points;
            standing.total_points += result.total_points();
            standing.event_count += 1;

            if standing.category.is_none() {
                standing.category = result.swimmer_category.clone();
            }

            if result.open_eligible || result.category_eligible {
                match result.position {
                    1 => standing.gold_medals += 1,
                    2 => standing.silver_medals += 1,
                    3 => standing.bronze_medals += 1,
                    _ => {}
                }
            }

            *declared_sum.entry(swimmer.id.clone()).or_insert(0) += result.declared_position;

            standing.events.push(SwimmerEventSummary {
                event_id: event.id.clone(),
                event_name: event.display_name(),
                position: result.position,
                points: result.open_points + result.category_points,
                time: result.time.clone(),
            });
        }
    }

    for standing in &mut standings {
        let sum = declared_sum.get(&standing.swimmer.id).copied().unwrap_or(0);
        if standing.event_count > 0 {
            standing.average_position =
                (Decimal::from(sum) / Decimal::from(standing.event_count)).round_dp(2);
        }
    }

    standings.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    standings
}
