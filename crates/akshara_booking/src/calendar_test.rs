#[cfg(test)]
mod tests {
    use crate::calendar::{generate_time_slots, CalendarSelection, MonthView};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn leap_year_february_has_29_day_cells() {
        let view = MonthView::containing(date(2024, 2, 1));
        assert_eq!(view.day_count(), 29);
        // Feb 1, 2024 was a Thursday
        assert_eq!(view.leading_blanks(), 4);
    }

    #[test]
    fn common_year_february_has_28_day_cells() {
        let view = MonthView::containing(date(2023, 2, 15));
        assert_eq!(view.day_count(), 28);
        // Feb 1, 2023 was a Wednesday
        assert_eq!(view.leading_blanks(), 3);
    }

    #[test]
    fn leading_blanks_match_the_weekday_of_the_first() {
        // (year, month, expected blanks with Sunday = 0, expected days)
        let cases = [
            (2025, 1, 3, 31),  // Jan 1, 2025: Wednesday
            (2025, 3, 6, 31),  // Mar 1, 2025: Saturday
            (2025, 6, 0, 30),  // Jun 1, 2025: Sunday
            (2024, 12, 0, 31), // Dec 1, 2024: Sunday
        ];
        for (year, month, blanks, days) in cases {
            let view = MonthView::containing(date(year, month, 1));
            assert_eq!(view.leading_blanks(), blanks, "{}-{}", year, month);
            assert_eq!(view.day_count(), days, "{}-{}", year, month);
        }
    }

    #[test]
    fn month_navigation_crosses_year_boundaries() {
        let january = MonthView::containing(date(2025, 1, 20));
        let december = january.previous();
        assert_eq!((december.year(), december.month()), (2024, 12));
        assert_eq!((december.next().year(), december.next().month()), (2025, 1));
    }

    #[test]
    fn twelve_steps_forward_is_the_same_month_next_year() {
        let mut view = MonthView::containing(date(2025, 3, 1));
        for _ in 0..12 {
            view = view.next();
        }
        assert_eq!((view.year(), view.month()), (2026, 3));
    }

    #[test]
    fn month_label_is_name_and_year() {
        let view = MonthView::containing(date(2025, 3, 12));
        assert_eq!(view.label(), "March 2025");
    }

    #[test]
    fn time_slots_are_the_fixed_half_hour_grid() {
        let expected: Vec<String> = [
            "9:00", "9:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30", "13:00",
            "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let slots = generate_time_slots();
        assert_eq!(slots.len(), 18);
        assert_eq!(slots, expected);
    }

    #[test]
    fn time_slots_do_not_depend_on_the_selection() {
        let before = generate_time_slots();
        let mut selection = CalendarSelection::starting_at(date(2025, 3, 1));
        selection.select_day(12);
        assert_eq!(generate_time_slots(), before);
    }

    #[test]
    fn selecting_a_new_day_clears_the_time() {
        let mut selection = CalendarSelection::starting_at(date(2025, 3, 1));
        selection.select_day(5);
        selection.select_time("10:00");
        assert_eq!(selection.selected_time(), Some("10:00"));

        selection.select_day(12);
        assert_eq!(selection.selected_date(), Some(date(2025, 3, 12)));
        assert_eq!(selection.selected_time(), None);
    }

    #[test]
    fn reselecting_the_same_day_also_clears_the_time() {
        let mut selection = CalendarSelection::starting_at(date(2025, 3, 1));
        selection.select_day(5);
        selection.select_time("14:30");
        selection.select_day(5);
        assert_eq!(selection.selected_time(), None);
    }

    #[test]
    fn selecting_a_time_without_a_date_is_dropped() {
        let mut selection = CalendarSelection::starting_at(date(2025, 3, 1));
        selection.select_time("10:00");
        assert_eq!(selection.selected_time(), None);
    }

    #[test]
    fn days_outside_the_month_are_ignored() {
        let mut selection = CalendarSelection::starting_at(date(2023, 2, 1));
        selection.select_day(12);
        selection.select_day(31); // February 2023 has 28 days
        assert_eq!(selection.selected_date(), Some(date(2023, 2, 12)));
        selection.select_day(0);
        assert_eq!(selection.selected_date(), Some(date(2023, 2, 12)));
    }

    #[test]
    fn date_string_is_zero_padded_iso() {
        let mut selection = CalendarSelection::starting_at(date(2025, 3, 1));
        selection.select_day(5);
        assert_eq!(selection.date_string().as_deref(), Some("2025-03-05"));
    }

    #[test]
    fn navigation_does_not_disturb_an_existing_selection() {
        let mut selection = CalendarSelection::starting_at(date(2025, 3, 1));
        selection.select_day(12);
        selection.select_time("10:30");
        selection.next_month();
        selection.previous_month();
        assert_eq!(selection.date_string().as_deref(), Some("2025-03-12"));
        assert_eq!(selection.selected_time(), Some("10:30"));
    }
}
