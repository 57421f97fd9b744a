use chrono::NaiveDate;

/// "Jan 2020"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// "January 15, 2020"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Display range stored in `duration` fields: "Jan 2020 - Present" when
/// `ongoing`, otherwise "Jan 2020 - Mar 2022". Missing ends render empty.
pub fn format_duration(start: Option<NaiveDate>, end: Option<NaiveDate>, ongoing: bool) -> String {
    let start = start.map(format_month_year).unwrap_or_default();
    let end = if ongoing {
        "Present".to_string()
    } else {
        end.map(format_month_year).unwrap_or_default()
    };
    format!("{start} - {end}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_year() {
        assert_eq!(format_month_year(date(2020, 1, 15)), "Jan 2020");
        assert_eq!(format_month_year(date(2022, 12, 1)), "Dec 2022");
    }

    #[test]
    fn test_long_date_has_no_zero_padding() {
        assert_eq!(format_long_date(date(2020, 1, 5)), "January 5, 2020");
        assert_eq!(format_long_date(date(2023, 11, 30)), "November 30, 2023");
    }

    #[test]
    fn test_duration_variants() {
        let start = Some(date(2020, 1, 1));
        let end = Some(date(2022, 3, 1));
        assert_eq!(format_duration(start, end, false), "Jan 2020 - Mar 2022");
        assert_eq!(format_duration(start, end, true), "Jan 2020 - Present");
        assert_eq!(format_duration(start, None, true), "Jan 2020 - Present");
        assert_eq!(format_duration(start, None, false), "Jan 2020 - ");
    }
}
