//! Unit tests for the decomposition cache

use builtins::{CalendarFields, DecompositionCache, TimeZoneKind};

fn marker(tag: u32) -> CalendarFields {
    CalendarFields {
        year: tag as i32,
        month: 0,
        day: 1,
        weekday: 0,
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    }
}

#[test]
fn test_repeated_lookup_is_bit_identical() {
    let mut cache = DecompositionCache::new();
    let ts = 1709209845500.0;
    let first = cache.get(ts, TimeZoneKind::Local);
    let second = cache.get(ts, TimeZoneKind::Local);
    assert_eq!(first, second);
}

#[test]
fn test_second_lookup_is_served_from_cache() {
    let mut cache = DecompositionCache::new();
    let ts = 86400000.0;

    let computed = cache.get_with(ts, TimeZoneKind::Utc, builtins::date_cache::decompose);

    // If the second call recomputed, it would return the marker instead.
    let cached = cache.get_with(ts, TimeZoneKind::Utc, |_, _| marker(9999));
    assert_eq!(cached, computed);
}

#[test]
fn test_miss_recomputes_and_overwrites() {
    let mut cache = DecompositionCache::new();
    let ts = 1000.0;

    let first = cache.get_with(ts, TimeZoneKind::Utc, |_, _| marker(1));
    assert_eq!(first, marker(1));

    // -1000.0 differs only in the sign bit, which the slot hash ignores,
    // so it lands in the same slot and evicts the first entry.
    let colliding = cache.get_with(-ts, TimeZoneKind::Utc, |_, _| marker(2));
    assert_eq!(colliding, marker(2));

    let recomputed = cache.get_with(ts, TimeZoneKind::Utc, |_, _| marker(3));
    assert_eq!(recomputed, marker(3));
}

#[test]
fn test_zones_are_cached_independently() {
    let mut cache = DecompositionCache::new();
    let ts = 5000.0;

    let local = cache.get_with(ts, TimeZoneKind::Local, |_, _| marker(1));
    let utc = cache.get_with(ts, TimeZoneKind::Utc, |_, _| marker(2));
    assert_eq!(local, marker(1));
    assert_eq!(utc, marker(2));

    // Both hit afterward.
    assert_eq!(
        cache.get_with(ts, TimeZoneKind::Local, |_, _| marker(3)),
        marker(1)
    );
    assert_eq!(
        cache.get_with(ts, TimeZoneKind::Utc, |_, _| marker(3)),
        marker(2)
    );
}

#[test]
fn test_nan_never_hits() {
    let mut cache = DecompositionCache::new();

    // A NaN lookup computes fresh every time and never populates a slot.
    let first = cache.get_with(f64::NAN, TimeZoneKind::Local, |_, _| marker(1));
    let second = cache.get_with(f64::NAN, TimeZoneKind::Local, |_, _| marker(2));
    assert_eq!(first, marker(1));
    assert_eq!(second, marker(2));
}

#[test]
fn test_nan_never_hits_against_empty_slots() {
    let mut cache = DecompositionCache::new();
    let fields = cache.get(f64::NAN, TimeZoneKind::Utc);
    // Falls back to the epoch decomposition, not a stale slot.
    assert_eq!(fields.year, 1970);
}

#[test]
fn test_distinct_keys_do_not_alias() {
    let mut cache = DecompositionCache::new();
    for day in 0..200 {
        let ts = day as f64 * 86400000.0;
        let fields = cache.get(ts, TimeZoneKind::Utc);
        let fresh = builtins::date_cache::decompose(ts, TimeZoneKind::Utc);
        assert_eq!(fields, fresh, "cache corrupted entry for day {}", day);
    }
}
