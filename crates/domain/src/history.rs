//! Historical series: the device's CSV log turned into chart-ready points.
//!
//! The export is a header row followed by
//! `timestamp,humidity,temperature[,pump,alert…]` rows. Parsing is
//! tolerant: rows with fewer than three fields or non-numeric (or
//! infinite) humidity/temperature are skipped, never reported.

use std::collections::VecDeque;
use std::fmt::Display;

use chrono::{NaiveDate, TimeZone};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::time::time_label;

/// Default number of points kept for charting.
pub const DEFAULT_MAX_POINTS: usize = 100;

const MIN_FIELDS: usize = 3;

/// One charted sample.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    /// `HH:MM` label (or the raw timestamp when it could not be parsed).
    pub label: String,
    pub humidity: f64,
    pub temperature: f64,
}

impl HistoryPoint {
    /// Build a point from one CSV record, returning `None` for anything malformed.
    fn from_record<Tz>(record: &StringRecord, tz: &Tz) -> Option<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if record.len() < MIN_FIELDS {
            return None;
        }
        let humidity = record.get(1).and_then(parse_number)?;
        let temperature = record.get(2).and_then(parse_number)?;
        Some(Self {
            label: time_label(record.get(0).unwrap_or_default(), tz),
            humidity,
            temperature,
        })
    }
}

fn parse_number(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A bounded, ordered series of history points; the oldest are dropped first.
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySeries {
    points: VecDeque<HistoryPoint>,
    capacity: usize,
}

impl Default for HistorySeries {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_POINTS)
    }
}

impl HistorySeries {
    /// An empty series keeping at most `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Parse a CSV export, keeping the last `capacity` valid rows in order.
    ///
    /// Timestamps with zone information are shown in `tz`.
    #[must_use]
    pub fn parse_csv<Tz>(csv: &str, capacity: usize, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .trim(Trim::All)
            .from_reader(csv.trim().as_bytes());
        let mut series = Self::with_capacity(capacity);
        reader
            .records()
            .filter_map(Result::ok)
            .filter_map(|record| HistoryPoint::from_record(&record, tz))
            .for_each(|point| series.push(point));
        series
    }

    /// Append a point, evicting the oldest one when the series is full.
    pub fn push(&mut self, point: HistoryPoint) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Drop every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryPoint> {
        self.points.iter()
    }

    /// X-axis labels, oldest first.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    #[must_use]
    pub fn humidity(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.humidity).collect()
    }

    #[must_use]
    pub fn temperature(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature).collect()
    }
}

/// File name offered when downloading the raw history export.
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("historico_riego_{}.csv", date.format("%Y-%m-%d"))
}
