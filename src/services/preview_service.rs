use serde::Serialize;

// Free-preview policy: short trips (3 days or fewer) show a single day,
// longer trips show two. Paying unlocks everything.
const SHORT_TRIP_MAX_DAYS: u32 = 3;
const SHORT_TRIP_VISIBLE_DAYS: u32 = 1;
const LONG_TRIP_VISIBLE_DAYS: u32 = 2;

/// Partition of day numbers into a visible prefix and a hidden suffix.
/// Hidden days are always the tail of the trip, never a scattered subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewPartition {
    pub visible: Vec<u32>,
    pub hidden: Vec<u32>,
}

/// How many days of an itinerary are shown before the unlock.
pub fn visible_day_count(total_days: u32, unlocked: bool) -> u32 {
    if unlocked {
        return total_days;
    }
    if total_days == 0 {
        0
    } else if total_days <= SHORT_TRIP_MAX_DAYS {
        SHORT_TRIP_VISIBLE_DAYS
    } else {
        LONG_TRIP_VISIBLE_DAYS
    }
}

/// Split day numbers 1..=total_days into visible and hidden runs. Pure and
/// total: zero days yields two empty partitions.
pub fn partition_days(total_days: u32, unlocked: bool) -> PreviewPartition {
    let visible_count = visible_day_count(total_days, unlocked);
    PreviewPartition {
        visible: (1..=visible_count).collect(),
        hidden: (visible_count + 1..=total_days).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_trip_shows_one_day_when_locked() {
        let partition = partition_days(3, false);
        assert_eq!(partition.visible, vec![1]);
        assert_eq!(partition.hidden, vec![2, 3]);
    }

    #[test]
    fn test_long_trip_shows_two_days_when_locked() {
        let partition = partition_days(4, false);
        assert_eq!(partition.visible, vec![1, 2]);
        assert_eq!(partition.hidden, vec![3, 4]);
    }

    #[test]
    fn test_unlocked_shows_everything() {
        let partition = partition_days(4, true);
        assert_eq!(partition.visible, vec![1, 2, 3, 4]);
        assert!(partition.hidden.is_empty());
    }

    #[test]
    fn test_single_day_trip() {
        let partition = partition_days(1, false);
        assert_eq!(partition.visible, vec![1]);
        assert!(partition.hidden.is_empty());
    }

    #[test]
    fn test_zero_days_is_empty_not_error() {
        let locked = partition_days(0, false);
        assert!(locked.visible.is_empty());
        assert!(locked.hidden.is_empty());

        let unlocked = partition_days(0, true);
        assert!(unlocked.visible.is_empty());
        assert!(unlocked.hidden.is_empty());
    }

    #[test]
    fn test_hidden_is_always_the_suffix() {
        for total in 0..20 {
            let partition = partition_days(total, false);
            let mut rebuilt = partition.visible.clone();
            rebuilt.extend(&partition.hidden);
            let expected: Vec<u32> = (1..=total).collect();
            assert_eq!(rebuilt, expected);
        }
    }
}
