#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::models::WeeklyChart;
    use crate::models::chart::UNAVAILABLE_TITLE;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // Weekly closes as Alpha Vantage delivers them: latest to earliest.
    fn sample_series() -> Vec<(NaiveDate, String)> {
        vec![
            (date(2020, 7, 24), String::from("148.34")),
            (date(2020, 7, 17), String::from("152.11")),
            (date(2020, 6, 11), String::from("144.50")),
            (date(2020, 2, 25), String::from("131.06")),
        ]
    }

    #[test]
    fn recent_purchase_gets_a_twelve_week_window() {
        let purchase_date = Some(date(2020, 7, 1));
        let today = date(2020, 7, 28);

        let chart = WeeklyChart::build("SBUX", purchase_date, today, &sample_series());

        // Window start is 2020-07-28 minus 12 weeks = 2020-05-05; the entry
        // from February falls out, the rest come back oldest first.
        assert_eq!(chart.title(), "Weekly Prices (SBUX)");
        assert_eq!(
            chart.labels(),
            &vec![date(2020, 6, 11), date(2020, 7, 17), date(2020, 7, 24)]
        );
        assert_eq!(
            chart.values(),
            &vec![
                String::from("144.50"),
                String::from("152.11"),
                String::from("148.34")
            ]
        );
    }

    #[test]
    fn old_purchase_windows_from_the_purchase_date() {
        let purchase_date = Some(date(2020, 3, 10));
        let today = date(2020, 7, 28);

        let chart = WeeklyChart::build("SBUX", purchase_date, today, &sample_series());

        // 2020-03-10 is more than 12 weeks back, so it is the window start
        // and the February entry is still excluded.
        assert_eq!(chart.labels().len(), 3);
        assert_eq!(chart.labels()[0], date(2020, 6, 11));
    }

    #[test]
    fn entry_on_the_window_start_day_is_excluded() {
        let purchase_date = Some(date(2020, 2, 25));
        let today = date(2020, 7, 28);

        let chart = WeeklyChart::build("SBUX", purchase_date, today, &sample_series());

        // Strictly-greater comparison: the boundary day itself is dropped.
        assert!(!chart.labels().contains(&date(2020, 2, 25)));
        assert_eq!(chart.labels().len(), 3);
    }

    #[test]
    fn missing_purchase_date_falls_back_to_the_twelve_week_window() {
        let today = date(2020, 7, 28);

        let chart = WeeklyChart::build("SBUX", None, today, &sample_series());

        assert_eq!(chart.labels().len(), 3);
        assert_eq!(chart.labels()[0], date(2020, 6, 11));
    }

    #[test]
    fn labels_and_values_stay_paired() {
        let chart = WeeklyChart::build(
            "SBUX",
            Some(date(2019, 1, 1)),
            date(2020, 7, 28),
            &sample_series(),
        );

        assert_eq!(chart.labels().len(), chart.values().len());
        let position = chart
            .labels()
            .iter()
            .position(|label| *label == date(2020, 7, 17))
            .unwrap();
        assert_eq!(chart.values()[position], "152.11");
    }

    #[test]
    fn empty_series_builds_an_empty_chart() {
        let chart = WeeklyChart::build("SBUX", Some(date(2020, 7, 1)), date(2020, 7, 28), &[]);

        assert_eq!(chart.title(), "Weekly Prices (SBUX)");
        assert!(chart.labels().is_empty());
        assert!(chart.values().is_empty());
    }

    #[test]
    fn unavailable_chart_has_the_sentinel_title_and_no_data() {
        let chart = WeeklyChart::unavailable();

        assert_eq!(chart.title(), UNAVAILABLE_TITLE);
        assert_eq!(chart.title(), "Stock chart is unavailable.");
        assert!(chart.labels().is_empty());
        assert!(chart.values().is_empty());
    }
}
