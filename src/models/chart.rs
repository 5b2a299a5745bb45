use chrono::{Duration, NaiveDate};
use derive_getters::Getters;

pub const UNAVAILABLE_TITLE: &str = "Stock chart is unavailable.";

/// Minimum trailing window shown on the chart, even for recent purchases.
const LOOKBACK_WEEKS: i64 = 12;

/// The data handed to the chart renderer: a title plus two parallel
/// sequences, one label per value, in chronological order.
#[derive(Clone, Debug, Getters, PartialEq)]
pub struct WeeklyChart {
    title: String,
    labels: Vec<NaiveDate>,
    values: Vec<String>,
}

impl WeeklyChart {
    /// The sentinel shown when the weekly series could not be retrieved.
    pub fn unavailable() -> Self {
        Self {
            title: UNAVAILABLE_TITLE.to_string(),
            labels: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Trims a latest-to-earliest weekly close series down to the chart
    /// window and flips it to chronological order.
    ///
    /// The window starts at the purchase date, or at `today` minus 12 weeks
    /// when the purchase is more recent than that (or has no date at all).
    /// Only entries strictly after the window start are kept.
    pub fn build(
        symbol: &str,
        purchase_date: Option<NaiveDate>,
        today: NaiveDate,
        series: &[(NaiveDate, String)],
    ) -> Self {
        let floor = today - Duration::weeks(LOOKBACK_WEEKS);
        let window_start = match purchase_date {
            Some(purchased) if purchased <= floor => purchased,
            _ => floor,
        };

        let mut labels = Vec::new();
        let mut values = Vec::new();
        for (date, close) in series {
            if *date > window_start {
                labels.push(*date);
                values.push(close.clone());
            }
        }

        // The series arrives latest to earliest; reverse both sequences so
        // the chart reads left to right, keeping labels paired with values.
        labels.reverse();
        values.reverse();

        Self {
            title: format!("Weekly Prices ({})", symbol),
            labels,
            values,
        }
    }
}
