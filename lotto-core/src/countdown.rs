use crate::error::{LottoError, Result};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveTime, Offset, Utc, Weekday};

/// Weekly draw time: Saturday 20:45 in a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct DrawSchedule {
    offset: FixedOffset,
    weekday: Weekday,
    minutes_after_midnight: i64,
}

impl DrawSchedule {
    pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

    pub fn new(utc_offset_hours: i32) -> Result<Self> {
        let offset = utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                LottoError::config(format!("UTC offset out of range: {}h", utc_offset_hours))
            })?;

        Ok(Self {
            offset,
            weekday: Weekday::Sat,
            minutes_after_midnight: 20 * 60 + 45,
        })
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The first draw strictly after `now`.
    ///
    /// At exactly the draw time the countdown rolls over to next week.
    pub fn next_draw_after(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        let local = now.with_timezone(&self.offset);
        let today = local.weekday().num_days_from_monday() as i64;
        let target = self.weekday.num_days_from_monday() as i64;
        let days_ahead = (target - today).rem_euclid(7);

        let midnight = local.date_naive().and_time(NaiveTime::default());
        let mut draw_local =
            midnight + Duration::days(days_ahead) + Duration::minutes(self.minutes_after_midnight);
        if draw_local <= local.naive_local() {
            draw_local += Duration::days(7);
        }

        let draw_utc = draw_local - Duration::seconds(self.offset.local_minus_utc() as i64);
        DateTime::from_naive_utc_and_offset(draw_utc, self.offset)
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        self.next_draw_after(now).with_timezone(&Utc) - now
    }

    /// Countdown text for `now`, as shown next to the latest result.
    pub fn countdown_text(&self, now: DateTime<Utc>) -> String {
        format_remaining(self.remaining(now))
    }
}

impl Default for DrawSchedule {
    fn default() -> Self {
        Self {
            offset: FixedOffset::east_opt(Self::DEFAULT_UTC_OFFSET_HOURS * 3600)
                .unwrap_or_else(|| Utc.fix()),
            weekday: Weekday::Sat,
            minutes_after_midnight: 20 * 60 + 45,
        }
    }
}

/// `"{d}d HH:MM:SS"`, days omitted when zero; negative durations clamp to zero.
pub fn format_remaining(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kst(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(y, m, d, h, min, s)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_next_draw_same_week() {
        let schedule = DrawSchedule::default();
        // Wednesday 2024-01-31 12:00 KST
        let next = schedule.next_draw_after(kst(2024, 1, 31, 12, 0, 0));
        assert_eq!(next.with_timezone(&Utc), kst(2024, 2, 3, 20, 45, 0));
    }

    #[test]
    fn test_rollover_at_draw_time() {
        let schedule = DrawSchedule::default();
        let at_draw = kst(2024, 2, 3, 20, 45, 0);
        assert_eq!(schedule.remaining(at_draw), Duration::days(7));

        let just_before = kst(2024, 2, 3, 20, 44, 59);
        assert_eq!(schedule.remaining(just_before), Duration::seconds(1));
        assert_eq!(schedule.countdown_text(just_before), "00:00:01");
    }

    #[test]
    fn test_sunday_waits_six_days() {
        let schedule = DrawSchedule::default();
        let sunday = kst(2024, 2, 4, 20, 45, 0);
        assert_eq!(schedule.remaining(sunday), Duration::days(6));
        assert_eq!(schedule.countdown_text(sunday), "6d 00:00:00");
    }

    #[test]
    fn test_utc_midnight_crosses_local_day() {
        // Friday 16:00 UTC is already Saturday 01:00 in KST
        let schedule = DrawSchedule::default();
        let now = Utc.with_ymd_and_hms(2024, 2, 2, 16, 0, 0).unwrap();
        assert_eq!(
            schedule.remaining(now),
            Duration::hours(19) + Duration::minutes(45)
        );
    }

    #[test]
    fn test_custom_offset() {
        let schedule = DrawSchedule::new(0).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 2, 3, 20, 0, 0).unwrap();
        assert_eq!(schedule.remaining(now), Duration::minutes(45));
        assert!(DrawSchedule::new(30).is_err());
    }

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(Duration::seconds(-5)), "00:00:00");
        assert_eq!(format_remaining(Duration::seconds(3_661)), "01:01:01");
        assert_eq!(
            format_remaining(Duration::days(2) + Duration::seconds(59)),
            "2d 00:00:59"
        );
    }
}
