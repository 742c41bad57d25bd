use chrono::{DateTime, Datelike};

use crate::errors::NormalizeError;

/// Year/month pair addressing one monthly game archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArchiveMonth {
    pub year: i32,
    pub month: u32,
}

impl ArchiveMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn from_timestamp(timestamp: i64) -> Result<Self, NormalizeError> {
        let date = DateTime::from_timestamp(timestamp, 0)
            .ok_or_else(|| NormalizeError::malformed(format!("invalid timestamp {}", timestamp)))?;
        Ok(Self::new(date.year(), date.month()))
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

/// Iterator over archive months, both endpoints included
pub struct MonthIterator {
    current: ArchiveMonth,
    last: ArchiveMonth,
}

impl MonthIterator {
    pub fn new(first: ArchiveMonth, last: ArchiveMonth) -> Self {
        Self {
            current: first,
            last,
        }
    }

    pub fn between_timestamps(joined: i64, last_online: i64) -> Result<Self, NormalizeError> {
        let first = ArchiveMonth::from_timestamp(joined)?;
        let last = ArchiveMonth::from_timestamp(last_online)?;
        Ok(Self::new(first, last))
    }

    pub fn has_reached_end(&self) -> bool {
        self.current > self.last
    }
}

impl Iterator for MonthIterator {
    type Item = ArchiveMonth;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_reached_end() {
            return None;
        }
        let month = self.current;
        self.current = month.next();
        Some(month)
    }
}
