//! View model for the board: active tab, selection, visible month.

use chrono::{Datelike, Months, NaiveDate};

use crate::status::Status;

/// Top-level screens, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Pending,
    InProgress,
    Done,
    Calendar,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Pending,
        Tab::InProgress,
        Tab::Done,
        Tab::Calendar,
        Tab::Profile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Pending => "Pending",
            Tab::InProgress => "In progress",
            Tab::Done => "Done",
            Tab::Calendar => "Calendar",
            Tab::Profile => "Profile",
        }
    }

    /// The category this tab lists, `None` for the calendar and profile.
    pub fn status(self) -> Option<Status> {
        match self {
            Tab::Pending => Some(Status::Pending),
            Tab::InProgress => Some(Status::InProgress),
            Tab::Done => Some(Status::Done),
            Tab::Calendar | Tab::Profile => None,
        }
    }

    pub fn next(self) -> Tab {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Mutable view state for the board screen.
#[derive(Debug)]
pub struct BoardModel {
    pub tab: Tab,
    /// Selected row within the active category column
    pub selected: usize,
    /// First day of the month shown on the calendar tab
    pub month: NaiveDate,
}

impl BoardModel {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            tab: Tab::Pending,
            selected: 0,
            month: first_of_month(today),
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
        self.selected = 0;
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
        self.selected = 0;
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the column after the list shrinks.
    pub fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(month) = self.month.checked_add_months(Months::new(1)) {
            self.month = month;
        }
    }

    pub fn prev_month(&mut self) {
        if let Some(month) = self.month.checked_sub_months(Months::new(1)) {
            self.month = month;
        }
    }
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Lay the visible month out as Monday-first weeks.
///
/// Cells outside the month are `None`; the last week is padded to seven.
pub fn month_weeks(month: NaiveDate) -> Vec<[Option<NaiveDate>; 7]> {
    let first = first_of_month(month);
    let mut weeks = Vec::new();
    let mut week: [Option<NaiveDate>; 7] = [None; 7];
    let mut slot = first.weekday().num_days_from_monday() as usize;
    let mut day = first;

    loop {
        week[slot] = Some(day);
        slot += 1;
        if slot == 7 {
            weeks.push(week);
            week = [None; 7];
            slot = 0;
        }
        match day.succ_opt() {
            Some(next) if next.month() == first.month() => day = next,
            _ => break,
        }
    }
    if slot != 0 {
        weeks.push(week);
    }
    weeks
}
