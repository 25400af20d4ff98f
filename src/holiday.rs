use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::America::Anchorage;

/// Decorations come down at 4pm on Dec 29, 2025, Alaska time.
pub fn decor_cutoff() -> DateTime<Utc> {
    Anchorage
        .with_ymd_and_hms(2025, 12, 29, 16, 0, 0)
        .unwrap()
        .with_timezone(&Utc)
}

/// The boundary is exclusive: at the cutoff instant itself the
/// decorations are already gone.
pub fn decor_active(now: DateTime<Utc>) -> bool {
    now < decor_cutoff()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn cutoff_is_one_am_utc_on_dec_30() {
        // 16:00 AKST = 01:00 UTC the next day
        let expected = Utc.with_ymd_and_hms(2025, 12, 30, 1, 0, 0).unwrap();
        assert_eq!(decor_cutoff(), expected);
    }

    #[test]
    fn active_strictly_before_cutoff() {
        assert!(decor_active(decor_cutoff() - Duration::seconds(1)));
        assert!(decor_active(
            Utc.with_ymd_and_hms(2025, 12, 1, 12, 0, 0).unwrap()
        ));
    }

    #[test]
    fn inactive_at_cutoff_instant() {
        assert!(!decor_active(decor_cutoff()));
    }

    #[test]
    fn inactive_after_cutoff() {
        assert!(!decor_active(decor_cutoff() + Duration::minutes(1)));
        assert!(!decor_active(
            Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap()
        ));
    }
}
