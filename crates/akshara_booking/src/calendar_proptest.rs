#[cfg(test)]
mod tests {
    use crate::calendar::{generate_time_slots, MonthView};
    use chrono::{Datelike, NaiveDate};
    use proptest::prelude::*;

    // Gregorian leap-year rule, written out independently of chrono so the
    // grid arithmetic is checked against first principles.
    fn is_leap_year(year: i32) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    fn expected_day_count(year: i32, month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 => {
                if is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            _ => unreachable!("month out of range"),
        }
    }

    fn view(year: i32, month: u32, day: u32) -> MonthView {
        MonthView::containing(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    proptest! {
        #[test]
        fn day_count_follows_the_gregorian_rule(
            year in 1900..2200i32,
            month in 1u32..=12,
        ) {
            prop_assert_eq!(view(year, month, 1).day_count(), expected_day_count(year, month));
        }

        #[test]
        fn leading_blanks_equal_the_weekday_of_day_one(
            year in 1900..2200i32,
            month in 1u32..=12,
        ) {
            let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let blanks = view(year, month, 1).leading_blanks();
            prop_assert!(blanks < 7);
            prop_assert_eq!(blanks, first.weekday().num_days_from_sunday());
        }

        #[test]
        fn grid_always_fits_six_weeks(
            year in 1900..2200i32,
            month in 1u32..=12,
        ) {
            let month_view = view(year, month, 1);
            prop_assert!(month_view.leading_blanks() + month_view.day_count() <= 42);
        }

        #[test]
        fn every_day_of_the_month_is_addressable(
            year in 1900..2200i32,
            month in 1u32..=12,
        ) {
            let month_view = view(year, month, 1);
            for day in 1..=month_view.day_count() {
                let date = month_view.date_of(day);
                prop_assert_eq!(date.map(|d| d.day()), Some(day));
            }
            prop_assert!(month_view.date_of(month_view.day_count() + 1).is_none());
        }

        #[test]
        fn previous_then_next_round_trips(
            year in 1900..2200i32,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let month_view = view(year, month, day);
            prop_assert_eq!(month_view.previous().next(), month_view);
            prop_assert_eq!(month_view.next().previous(), month_view);
        }

        #[test]
        fn slot_list_is_invariant(_seed in 0u32..100) {
            let slots = generate_time_slots();
            prop_assert_eq!(slots.len(), 18);
            prop_assert_eq!(slots.first().map(String::as_str), Some("9:00"));
            prop_assert_eq!(slots.last().map(String::as_str), Some("17:30"));
            for slot in &slots {
                prop_assert!(slot.ends_with(":00") || slot.ends_with(":30"));
            }
        }
    }
}
