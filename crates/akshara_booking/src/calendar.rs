// --- File: crates/akshara_booking/src/calendar.rs ---
//! Calendar sub-state of the booking widget: month navigation, the day
//! grid, and the fixed half-hour time slots.

use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

/// First bookable hour of the day (inclusive).
const FIRST_SLOT_HOUR: u32 = 9;
/// Last bookable hour of the day (inclusive); each hour yields an
/// `HH:00` and an `HH:30` slot, so the final slot is 17:30.
const LAST_SLOT_HOUR: u32 = 17;

/// The month currently shown in the calendar grid.
///
/// Navigation is unrestricted in both directions; nothing prevents
/// viewing (or selecting) a month in the past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate, // always day 1 of the viewed month
}

impl MonthView {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        // with_day(1) is valid for every calendar month
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1–12.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// One calendar month earlier, crossing year boundaries.
    pub fn previous(self) -> Self {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// One calendar month later, crossing year boundaries.
    pub fn next(self) -> Self {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| Self { first })
            .unwrap_or(self)
    }

    /// Number of leading blank cells in a 7-column grid, i.e. the weekday
    /// index of the 1st of the month with Sunday = 0.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Number of days in the viewed month.
    pub fn day_count(&self) -> u32 {
        let next_first = Self::next(*self).first;
        (next_first - self.first).num_days() as u32
    }

    /// Header label, e.g. `"March 2025"`.
    pub fn label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// The date of the given day-of-month, if it exists in this month.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.day_count() {
            return None;
        }
        self.first.with_day(day)
    }
}

/// The fixed list of half-hour slots offered for every day: `"9:00"`
/// through `"17:30"`, 18 entries. Slots are not filtered by availability,
/// weekday, or existing bookings.
pub fn generate_time_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(((LAST_SLOT_HOUR - FIRST_SLOT_HOUR + 1) * 2) as usize);
    for hour in FIRST_SLOT_HOUR..=LAST_SLOT_HOUR {
        slots.push(format!("{}:00", hour));
        slots.push(format!("{}:30", hour));
    }
    slots
}

/// Ephemeral date/time selection state.
///
/// Invariant: selecting a day clears any selected time, so a slot picked
/// for one day can never be submitted against another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSelection {
    view: MonthView,
    date: Option<NaiveDate>,
    time: Option<String>,
}

impl CalendarSelection {
    /// A fresh selection viewing the month containing `today`.
    pub fn starting_at(today: NaiveDate) -> Self {
        Self {
            view: MonthView::containing(today),
            date: None,
            time: None,
        }
    }

    pub fn view(&self) -> MonthView {
        self.view
    }

    pub fn previous_month(&mut self) {
        self.view = self.view.previous();
    }

    pub fn next_month(&mut self) {
        self.view = self.view.next();
    }

    /// Select a day of the currently viewed month. Clears the selected
    /// time. Days outside the month are ignored.
    pub fn select_day(&mut self, day: u32) {
        match self.view.date_of(day) {
            Some(date) => {
                self.date = Some(date);
                self.time = None;
            }
            None => {
                debug!("ignoring day {} outside {}", day, self.view.label());
            }
        }
    }

    /// Select a time slot. Slots are only offered once a date is selected;
    /// without one the input is dropped.
    pub fn select_time(&mut self, slot: &str) {
        if self.date.is_none() {
            debug!("ignoring time slot {} with no date selected", slot);
            return;
        }
        self.time = Some(slot.to_string());
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// The selected date as the wire format `YYYY-MM-DD`.
    pub fn date_string(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}
