//! Memoized timestamp-to-calendar-field decomposition for the Date
//! built-ins.
//!
//! Every calendar-field property access (year, month, day, ...) needs the
//! timestamp broken down into fields, which is expensive enough to be worth
//! caching. The cache is a small direct-mapped table: collisions evict, a
//! miss recomputes, and correctness never depends on a hit.

use chrono::{DateTime, Datelike, Local, TimeZone, Timelike, Utc};

const CACHE_SIZE: usize = 64;

/// Which wall clock a decomposition is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeZoneKind {
    /// The host's local time zone
    Local,
    /// Coordinated universal time
    Utc,
}

/// A timestamp decomposed into calendar fields.
///
/// Month is 0-indexed (0 = January) and weekday counts from Sunday = 0,
/// matching the conventions of the date built-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarFields {
    /// Full year (e.g. 2024)
    pub year: i32,
    /// Month, 0-11
    pub month: u32,
    /// Day of month, 1-31
    pub day: u32,
    /// Day of week, 0 (Sunday) - 6 (Saturday)
    pub weekday: u32,
    /// Hour, 0-23
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// Second, 0-59
    pub second: u32,
    /// Millisecond, 0-999
    pub millisecond: u32,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    local: Option<(u64, CalendarFields)>,
    utc: Option<(u64, CalendarFields)>,
}

/// Fixed-capacity, direct-mapped decomposition cache.
///
/// Not thread-safe: one instance per execution context, matching the
/// lifetime of the global object that owns it. The `&mut self` API makes
/// cross-thread sharing impossible without external locking.
///
/// # Examples
///
/// ```
/// use builtins::{DecompositionCache, TimeZoneKind};
///
/// let mut cache = DecompositionCache::new();
/// let fields = cache.get(0.0, TimeZoneKind::Utc);
/// assert_eq!(fields.year, 1970);
/// assert_eq!(fields.weekday, 4); // Thursday
/// ```
#[derive(Debug, Clone)]
pub struct DecompositionCache {
    slots: Vec<Slot>,
}

impl DecompositionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        DecompositionCache {
            slots: vec![Slot::default(); CACHE_SIZE],
        }
    }

    /// Decompose `timestamp_ms` (milliseconds since the epoch), consulting
    /// the cache and falling back to `compute` on a miss.
    ///
    /// The slot index is a hash of the raw bit pattern masked to the table
    /// size; a stored key hits only on bit-equality. A miss overwrites the
    /// slot unconditionally. NaN timestamps bypass the cache entirely, so
    /// NaN is never stored and never hits.
    pub fn get_with(
        &mut self,
        timestamp_ms: f64,
        zone: TimeZoneKind,
        compute: impl FnOnce(f64, TimeZoneKind) -> CalendarFields,
    ) -> CalendarFields {
        if timestamp_ms.is_nan() {
            return compute(timestamp_ms, zone);
        }

        let bits = timestamp_ms.to_bits();
        let index = (bits ^ (bits >> 32)) as usize & (CACHE_SIZE - 1);
        let pair = match zone {
            TimeZoneKind::Local => &mut self.slots[index].local,
            TimeZoneKind::Utc => &mut self.slots[index].utc,
        };

        if let Some((key, fields)) = pair {
            if *key == bits {
                return *fields;
            }
        }

        let fields = compute(timestamp_ms, zone);
        *pair = Some((bits, fields));
        fields
    }

    /// Decompose `timestamp_ms` using the built-in calendar conversion.
    pub fn get(&mut self, timestamp_ms: f64, zone: TimeZoneKind) -> CalendarFields {
        self.get_with(timestamp_ms, zone, decompose)
    }
}

impl Default for DecompositionCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Break an epoch-millisecond timestamp into calendar fields.
///
/// Timestamps outside the representable range (and NaN) decompose to the
/// epoch's fields; validity checking belongs to the Date object itself.
pub fn decompose(timestamp_ms: f64, zone: TimeZoneKind) -> CalendarFields {
    const EPOCH: CalendarFields = CalendarFields {
        year: 1970,
        month: 0,
        day: 1,
        weekday: 4,
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    if timestamp_ms.is_nan() {
        return EPOCH;
    }

    let secs = (timestamp_ms / 1000.0).floor();
    let millis = (timestamp_ms - secs * 1000.0) as u32;
    if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
        return EPOCH;
    }

    let utc = match DateTime::<Utc>::from_timestamp(secs as i64, millis * 1_000_000) {
        Some(dt) => dt,
        None => return EPOCH,
    };

    match zone {
        TimeZoneKind::Utc => fields_of(&utc),
        TimeZoneKind::Local => fields_of(&utc.with_timezone(&Local)),
    }
}

fn fields_of<Tz: TimeZone>(dt: &DateTime<Tz>) -> CalendarFields {
    CalendarFields {
        year: dt.year(),
        month: dt.month0(),
        day: dt.day(),
        weekday: dt.weekday().num_days_from_sunday(),
        hour: dt.hour(),
        minute: dt.minute(),
        second: dt.second(),
        millisecond: dt.timestamp_subsec_millis(),
    }
}
