// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Month/year source for headline templates.
//!
//! Templates mention the current month and year. Reading the wall clock inside the
//! pipeline would make output depend on when tests run, so the pipeline takes a
//! `Clock` and tests pass a `FixedClock`.

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthYear {
    pub month: u32,
    pub year: i32,
}

impl MonthYear {
    /// Create a month/year pair. Returns `None` if `month` is outside 1..=12.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { month, year })
    }

    /// English month name, e.g. "October".
    pub fn month_name(&self) -> &'static str {
        let idx = (self.month.clamp(1, 12) - 1) as usize;
        MONTH_NAMES[idx]
    }
}

/// Something that knows what month it is.
pub trait Clock {
    fn month_year(&self) -> MonthYear;
}

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn month_year(&self) -> MonthYear {
        let now = Local::now();
        MonthYear {
            month: now.month(),
            year: now.year(),
        }
    }
}

/// Always reports the same month.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub MonthYear);

impl Clock for FixedClock {
    fn month_year(&self) -> MonthYear {
        self.0
    }
}
