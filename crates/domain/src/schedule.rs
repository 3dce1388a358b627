//! The persisted on/off schedule and its window evaluator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;

/// The persisted on-time/off-time pair controlling automatic actuation.
///
/// Both fields are independently optional. The evaluator treats "either
/// absent" as "no automatic control this cycle": the output is left at
/// whatever level it last held.
///
/// The serde shape is exactly the durable record layout —
/// `{"time_on": "HH:MM"|null, "time_off": "HH:MM"|null}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    /// When the light should come on, or `None` for no automatic control.
    pub time_on: Option<TimeOfDay>,
    /// When the light should go off, or `None` for no automatic control.
    pub time_off: Option<TimeOfDay>,
}

/// Tri-state output of the window evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actuation {
    /// `now` lies inside the buffered on-window.
    TurnOn,
    /// `now` lies outside the buffered on-window.
    TurnOff,
    /// The schedule is incomplete; leave the output untouched.
    NoOp,
}

impl Schedule {
    /// Build a schedule from the two optional endpoints.
    #[must_use]
    pub fn new(time_on: Option<TimeOfDay>, time_off: Option<TimeOfDay>) -> Self {
        Self { time_on, time_off }
    }

    /// Whether both endpoints are set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.time_on.is_some() && self.time_off.is_some()
    }

    /// Decide what the output should do at `now`.
    ///
    /// The on-window is `[time_on − buffer, time_off + buffer]`, inclusive at
    /// both edges, compared in seconds-of-day. `now` carries no seconds
    /// component (minute granularity), while the buffer is applied in exact
    /// seconds — so a sub-minute buffer never pulls the start edge back to
    /// the previous whole minute: with `time_on = 08:00` and a 10 s buffer,
    /// `07:59` still evaluates to [`Actuation::TurnOff`].
    ///
    /// Known limitation: there is no day-rollover handling. When
    /// `time_off < time_on` the inclusive range is empty and the answer is
    /// always [`Actuation::TurnOff`]; an overnight window cannot be
    /// expressed.
    #[must_use]
    pub fn evaluate(&self, now: TimeOfDay, buffer: Duration) -> Actuation {
        let (Some(on), Some(off)) = (self.time_on, self.time_off) else {
            return Actuation::NoOp;
        };

        let buffer = i64::try_from(buffer.as_secs()).unwrap_or(i64::MAX);
        let start = on.seconds_of_day().saturating_sub(buffer);
        let end = off.seconds_of_day().saturating_add(buffer);
        let now = now.seconds_of_day();

        if start <= now && now <= end {
            Actuation::TurnOn
        } else {
            Actuation::TurnOff
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    fn schedule(on: &str, off: &str) -> Schedule {
        Schedule::new(Some(on.parse().unwrap()), Some(off.parse().unwrap()))
    }

    #[test]
    fn should_turn_on_for_every_minute_inside_window() {
        let s = schedule("08:00", "18:00");
        let buffer = Duration::from_secs(0);

        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let now = at(hour, minute);
                let inside = now >= at(8, 0) && now <= at(18, 0);
                let expected = if inside {
                    Actuation::TurnOn
                } else {
                    Actuation::TurnOff
                };
                assert_eq!(s.evaluate(now, buffer), expected, "at {now}");
            }
        }
    }

    #[test]
    fn should_include_both_edges() {
        let s = schedule("08:00", "18:00");
        let buffer = Duration::from_secs(0);
        assert_eq!(s.evaluate(at(8, 0), buffer), Actuation::TurnOn);
        assert_eq!(s.evaluate(at(18, 0), buffer), Actuation::TurnOn);
        assert_eq!(s.evaluate(at(7, 59), buffer), Actuation::TurnOff);
        assert_eq!(s.evaluate(at(18, 1), buffer), Actuation::TurnOff);
    }

    #[test]
    fn should_noop_when_on_time_unset() {
        let s = Schedule::new(None, Some(at(18, 0)));
        for hour in 0..24u8 {
            assert_eq!(
                s.evaluate(at(hour, 0), Duration::from_secs(10)),
                Actuation::NoOp
            );
        }
    }

    #[test]
    fn should_noop_when_off_time_unset() {
        let s = Schedule::new(Some(at(8, 0)), None);
        assert_eq!(s.evaluate(at(12, 0), Duration::ZERO), Actuation::NoOp);
    }

    #[test]
    fn should_noop_when_both_unset() {
        let s = Schedule::default();
        assert_eq!(s.evaluate(at(12, 0), Duration::ZERO), Actuation::NoOp);
    }

    #[test]
    fn should_not_widen_start_edge_with_sub_minute_buffer() {
        // 08:00 − 10s = 07:59:50; a minute-truncated 07:59 sits before it.
        let s = schedule("08:00", "18:00");
        let buffer = Duration::from_secs(10);
        assert_eq!(s.evaluate(at(7, 59), buffer), Actuation::TurnOff);
        assert_eq!(s.evaluate(at(8, 0), buffer), Actuation::TurnOn);
    }

    #[test]
    fn should_widen_edges_with_whole_minute_buffer() {
        let s = schedule("08:00", "18:00");
        let buffer = Duration::from_secs(60);
        assert_eq!(s.evaluate(at(7, 59), buffer), Actuation::TurnOn);
        assert_eq!(s.evaluate(at(18, 1), buffer), Actuation::TurnOn);
        assert_eq!(s.evaluate(at(7, 58), buffer), Actuation::TurnOff);
        assert_eq!(s.evaluate(at(18, 2), buffer), Actuation::TurnOff);
    }

    #[test]
    fn should_answer_turn_off_for_inverted_range() {
        // Off before on: the literal numeric range is empty. Known
        // limitation — an overnight window cannot be expressed.
        let s = schedule("22:00", "06:00");
        let buffer = Duration::from_secs(10);
        for hour in 0..24u8 {
            assert_eq!(s.evaluate(at(hour, 30), buffer), Actuation::TurnOff);
        }
    }

    #[test]
    fn should_not_overflow_at_midnight_with_buffer() {
        let s = schedule("00:00", "23:59");
        let buffer = Duration::from_secs(3600);
        assert_eq!(s.evaluate(at(0, 0), buffer), Actuation::TurnOn);
    }

    #[test]
    fn should_serialize_unset_fields_as_null() {
        let json = serde_json::to_string(&Schedule::default()).unwrap();
        assert_eq!(json, r#"{"time_on":null,"time_off":null}"#);
    }

    #[test]
    fn should_serialize_set_fields_as_hhmm_strings() {
        let s = schedule("08:00", "18:00");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"time_on":"08:00","time_off":"18:00"}"#);
    }

    #[test]
    fn should_deserialize_missing_fields_as_unset() {
        let s: Schedule = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Schedule::default());
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        for s in [
            Schedule::default(),
            schedule("08:00", "18:00"),
            Schedule::new(Some(at(22, 0)), None),
        ] {
            let json = serde_json::to_string(&s).unwrap();
            let parsed: Schedule = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, s);
        }
    }
}
