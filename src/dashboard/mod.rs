//! Dashboard dataset and the transformations feeding its charts.
//!
//! The dataset is static and embedded as JSON; [`client_loader`] stands in for
//! a remote fetch.

pub mod chart;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Embedded dashboard dataset.
const DATASET: &str = include_str!("dashboard.json");

/// Days covered by each weekly series.
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("dashboard dataset is malformed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{series} series has {len} points, expected {}", DAYS_PER_WEEK)]
    SeriesLength { series: &'static str, len: usize },
}

/// Total contacts per day for the last 7 days.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyContacts {
    pub last_week: Vec<u32>,
    pub this_week: Vec<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Support {
    pub email: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRevenue {
    pub last_week: u64,
    pub this_week: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactSource {
    pub source: String,
    pub count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub contacts: WeeklyContacts,
    pub support: Support,
    pub shopify_revenue: WeeklyRevenue,
    pub contact_sources: Vec<ContactSource>,
}

/// Load the dashboard dataset.
pub async fn client_loader() -> Result<DashboardData, DashboardError> {
    let data = parse_dataset(DATASET)?;

    tracing::info!(support = %data.support.email, "Dashboard data loaded");
    tracing::info!(
        last_week = data.shopify_revenue.last_week,
        this_week = data.shopify_revenue.this_week,
        "Shopify revenue"
    );
    tracing::info!(
        last_week = ?data.contacts.last_week,
        this_week = ?data.contacts.this_week,
        "Contacts per day"
    );
    for source in &data.contact_sources {
        tracing::info!(source = %source.source, count = source.count, "Contact source");
    }

    Ok(data)
}

/// Decode and validate a dataset.
pub fn parse_dataset(raw: &str) -> Result<DashboardData, DashboardError> {
    let data: DashboardData = serde_json::from_str(raw)?;

    for (series, values) in [
        ("lastWeek", &data.contacts.last_week),
        ("thisWeek", &data.contacts.this_week),
    ] {
        if values.len() != DAYS_PER_WEEK {
            return Err(DashboardError::SeriesLength {
                series,
                len: values.len(),
            });
        }
    }

    Ok(data)
}

/// The two contact series plotted on the line chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Series {
    LastWeek,
    ThisWeek,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::LastWeek, Series::ThisWeek];

    pub fn label(self) -> &'static str {
        match self {
            Series::LastWeek => "Last week",
            Series::ThisWeek => "This week",
        }
    }

    /// Stable identifier for class names.
    pub fn key(self) -> &'static str {
        match self {
            Series::LastWeek => "last-week",
            Series::ThisWeek => "this-week",
        }
    }
}

/// One weekday with both series' values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeekdayRow {
    pub day: Weekday,
    pub last_week: u32,
    pub this_week: u32,
}

impl WeekdayRow {
    pub fn label(&self) -> String {
        self.day.to_string()
    }

    pub fn value(&self, series: Series) -> u32 {
        match series {
            Series::LastWeek => self.last_week,
            Series::ThisWeek => self.this_week,
        }
    }

    pub fn delta(&self) -> i64 {
        i64::from(self.this_week) - i64::from(self.last_week)
    }
}

/// Zip both weekly series into Monday-first rows.
pub fn weekday_rows(contacts: &WeeklyContacts) -> Vec<WeekdayRow> {
    let mut day = Weekday::Mon;
    contacts
        .last_week
        .iter()
        .zip(&contacts.this_week)
        .take(DAYS_PER_WEEK)
        .map(|(&last_week, &this_week)| {
            let row = WeekdayRow {
                day,
                last_week,
                this_week,
            };
            day = day.succ();
            row
        })
        .collect()
}

/// Week-over-week comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Growth {
    pub previous: f64,
    pub current: f64,
}

impl Growth {
    /// Percent change, or `None` when there is no previous value.
    pub fn percent(&self) -> Option<f64> {
        if self.previous == 0.0 {
            return None;
        }
        Some((self.current - self.previous) / self.previous * 100.0)
    }

    pub fn is_up(&self) -> bool {
        self.current >= self.previous
    }
}

impl DashboardData {
    pub fn contact_growth(&self) -> Growth {
        Growth {
            previous: self.contacts.last_week.iter().map(|&v| f64::from(v)).sum(),
            current: self.contacts.this_week.iter().map(|&v| f64::from(v)).sum(),
        }
    }

    pub fn revenue_growth(&self) -> Growth {
        Growth {
            previous: self.shopify_revenue.last_week as f64,
            current: self.shopify_revenue.this_week as f64,
        }
    }

    pub fn total_contacts(&self) -> u32 {
        self.contact_sources.iter().map(|s| s.count).sum()
    }
}

/// A contact source with its share of all contacts.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceShare {
    pub source: String,
    pub count: u32,
    pub percent: f64,
}

pub fn source_shares(sources: &[ContactSource]) -> Vec<SourceShare> {
    let total: u32 = sources.iter().map(|s| s.count).sum();
    sources
        .iter()
        .map(|s| SourceShare {
            source: s.source.clone(),
            count: s.count,
            percent: if total == 0 {
                0.0
            } else {
                f64::from(s.count) / f64::from(total) * 100.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> DashboardData {
        parse_dataset(DATASET).expect("embedded dataset should parse")
    }

    #[test]
    fn test_embedded_dataset() {
        let data = dataset();
        assert_eq!(data.support.email, "help@keaz.app");
        assert_eq!(data.shopify_revenue.this_week, 20023);
        assert_eq!(data.contact_sources.len(), 5);
        assert_eq!(data.total_contacts(), 451);
    }

    #[test]
    fn test_loader_returns_dataset() {
        let data = tokio_test::block_on(client_loader()).expect("loader should succeed");
        assert_eq!(data, dataset());
    }

    #[test]
    fn test_short_series_rejected() {
        let raw = r#"{
            "contacts": { "lastWeek": [1, 2, 3], "thisWeek": [1, 2, 3, 4, 5, 6, 7] },
            "support": { "email": "x@y.z" },
            "shopifyRevenue": { "lastWeek": 1, "thisWeek": 2 },
            "contactSources": []
        }"#;
        match parse_dataset(raw) {
            Err(DashboardError::SeriesLength { series, len }) => {
                assert_eq!(series, "lastWeek");
                assert_eq!(len, 3);
            }
            other => panic!("Expected SeriesLength error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            parse_dataset("{ not json"),
            Err(DashboardError::Decode(_))
        ));
    }

    #[test]
    fn test_weekday_rows_align_series() {
        let rows = weekday_rows(&dataset().contacts);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].day, Weekday::Mon);
        assert_eq!(rows[0].label(), "Mon");
        assert_eq!(rows[0].last_week, 398);
        assert_eq!(rows[0].this_week, 438);
        assert_eq!(rows[6].day, Weekday::Sun);
        assert_eq!(rows[6].delta(), 62);
        assert_eq!(rows[1].value(Series::ThisWeek), 438);
    }

    #[test]
    fn test_growth() {
        let data = dataset();
        let contacts = data.contact_growth();
        assert_eq!(contacts.previous, 3000.0);
        assert_eq!(contacts.current, 3242.0);
        assert!(contacts.is_up());

        let revenue = data.revenue_growth().percent().expect("previous is non-zero");
        assert!((revenue - 26.137).abs() < 0.01);

        let flat = Growth {
            previous: 0.0,
            current: 5.0,
        };
        assert_eq!(flat.percent(), None);
    }

    #[test]
    fn test_source_shares_sum_to_hundred() {
        let shares = source_shares(&dataset().contact_sources);
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert_eq!(shares[0].source, "Shopify Order");

        assert!(source_shares(&[ContactSource {
            source: "Empty".to_string(),
            count: 0,
        }])
        .iter()
        .all(|s| s.percent == 0.0));
    }
}
