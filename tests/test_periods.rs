use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use cave_sunlight::periods::find_avoidance_periods;
use cave_sunlight::types::{SolarPathPoint, SolarPosition, AVOIDANCE_DESCRIPTION};

fn t(k: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 21, 6, 0, 0).unwrap() + TimeDelta::minutes(15 * k)
}

/// One point per `(is_visible, hits_cave)` flag pair, 15 minutes apart.
fn points(flags: &[(bool, bool)]) -> Vec<SolarPathPoint<Utc>> {
    flags
        .iter()
        .enumerate()
        .map(|(k, &(is_visible, hits_cave))| SolarPathPoint {
            time: t(k as i64),
            position: SolarPosition::new(180.0, if is_visible { 30.0 } else { -5.0 }),
            is_visible,
            hits_cave,
        })
        .collect()
}

fn spans(flags: &[(bool, bool)]) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    find_avoidance_periods(&points(flags))
        .into_iter()
        .map(|p| (p.start, p.end))
        .collect()
}

const AVOID: (bool, bool) = (true, false);
const HIT: (bool, bool) = (true, true);
const DARK: (bool, bool) = (false, false);

#[test]
fn test_closes_on_predecessor_and_at_sequence_end() {
    assert_eq!(
        spans(&[AVOID, AVOID, HIT, AVOID]),
        vec![(t(0), t(1)), (t(3), t(3))]
    );
}

#[test]
fn test_all_hits_yields_nothing() {
    assert!(spans(&[HIT; 96]).is_empty());
}

#[test]
fn test_empty_input() {
    assert!(find_avoidance_periods::<Utc>(&[]).is_empty());
}

#[test]
fn test_darkness_ends_a_period() {
    assert_eq!(
        spans(&[DARK, AVOID, AVOID, AVOID, DARK, DARK]),
        vec![(t(1), t(3))]
    );
}

#[test]
fn test_single_avoiding_point_between_hits() {
    assert_eq!(spans(&[HIT, AVOID, HIT]), vec![(t(1), t(1))]);
}

#[test]
fn test_typical_day_has_morning_and_afternoon_periods() {
    let mut flags = vec![DARK; 4];
    flags.extend([AVOID; 10]);
    flags.extend([HIT; 3]);
    flags.extend([AVOID; 10]);
    flags.extend([DARK; 4]);
    assert_eq!(spans(&flags), vec![(t(4), t(13)), (t(17), t(26))]);
}

#[test]
fn test_period_running_to_end_of_day() {
    assert_eq!(spans(&[HIT, AVOID, AVOID]), vec![(t(1), t(2))]);
    assert_eq!(spans(&[AVOID]), vec![(t(0), t(0))]);
}

#[test]
fn test_periods_chronological_and_disjoint() {
    let flags = [AVOID, HIT, AVOID, AVOID, DARK, AVOID, HIT, HIT, AVOID];
    let periods = find_avoidance_periods(&points(&flags));
    assert_eq!(periods.len(), 4);
    for p in &periods {
        assert!(p.start <= p.end);
        assert_eq!(p.description, AVOIDANCE_DESCRIPTION);
    }
    for w in periods.windows(2) {
        assert!(w[0].end < w[1].start);
    }
}

#[test]
fn test_period_duration() {
    let periods = find_avoidance_periods(&points(&[AVOID, AVOID, AVOID, HIT]));
    assert_eq!(periods[0].duration(), TimeDelta::minutes(30));
    assert_eq!(periods[0].duration_minutes(), 30);
}
