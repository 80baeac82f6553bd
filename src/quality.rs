use std::fmt;
use crate::models::WeatherReport;

/// Lowest accepted Celsius reading
pub const MIN_TEMP_C: i32 = -100;
/// Highest accepted Celsius reading
pub const MAX_TEMP_C: i32 = 100;

/// A data-quality finding for one report
///
/// Findings are informational, a fixture with issues is still a valid fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityIssue {
    EmptyField { index: usize, field: &'static str },
    ImplausibleTemperature { index: usize, temp_c: i32 },
    ConversionDrift { index: usize, expected_f: i64, actual_f: i32 },
}

impl fmt::Display for QualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QualityIssue::EmptyField { index, field } =>
                write!(f, "record {}: field '{}' is empty", index, field),
            QualityIssue::ImplausibleTemperature { index, temp_c } =>
                write!(f, "record {}: temperature {} °C outside [{}, {}]", index, temp_c, MIN_TEMP_C, MAX_TEMP_C),
            QualityIssue::ConversionDrift { index, expected_f, actual_f } =>
                write!(f, "record {}: {} °F given, {} °F expected from Celsius reading", index, actual_f, expected_f),
        }
    }
}

/// Converts a Celsius reading to Fahrenheit, rounded to the nearest degree
///
/// Works in `i64` so every `i32` reading converts without overflow. Fifths never land on a
/// half degree, so rounding has no ties.
///
/// # Arguments
///
/// * 'temp_c' - temperature in degrees Celsius
pub fn fahrenheit_from_celsius(temp_c: i32) -> i64 {
    let fifths = temp_c as i64 * 9 + 160;
    if fifths >= 0 {
        (fifths + 2) / 5
    } else {
        (fifths - 2) / 5
    }
}

/// Checks reports for empty text, implausible temperatures and Fahrenheit readings that
/// drift from the Celsius ones
///
/// # Arguments
///
/// * 'reports' - reports to check
/// * 'tolerance' - accepted difference in degrees Fahrenheit before drift is reported
pub fn check_reports(reports: &[WeatherReport], tolerance: u32) -> Vec<QualityIssue> {
    let mut issues = Vec::new();

    for (index, report) in reports.iter().enumerate() {
        for (field, value) in report.text_fields() {
            if value.trim().is_empty() {
                issues.push(QualityIssue::EmptyField { index, field });
            }
        }

        if !(MIN_TEMP_C..=MAX_TEMP_C).contains(&report.temp_c) {
            issues.push(QualityIssue::ImplausibleTemperature { index, temp_c: report.temp_c });
            continue;
        }

        let expected_f = fahrenheit_from_celsius(report.temp_c);
        if expected_f.abs_diff(report.temp_f as i64) > tolerance as u64 {
            issues.push(QualityIssue::ConversionDrift { index, expected_f, actual_f: report.temp_f });
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::get_reports;

    #[test]
    fn conversion_rounds_to_nearest() {
        assert_eq!(fahrenheit_from_celsius(0), 32);
        assert_eq!(fahrenheit_from_celsius(100), 212);
        assert_eq!(fahrenheit_from_celsius(-40), -40);
        assert_eq!(fahrenheit_from_celsius(26), 79);
        assert_eq!(fahrenheit_from_celsius(-3), 27);
        assert_eq!(fahrenheit_from_celsius(-6), 21);
    }

    #[test]
    fn conversion_covers_the_whole_i32_range() {
        assert_eq!(fahrenheit_from_celsius(i32::MAX), 3_865_470_597);
        assert_eq!(fahrenheit_from_celsius(i32::MIN), -3_865_470_534);
    }

    #[test]
    fn fixture_is_consistent_within_one_degree() {
        assert!(check_reports(get_reports(), 1).is_empty());
    }

    #[test]
    fn fixture_has_loose_roundings_at_zero_tolerance() {
        let drifted: Vec<usize> = check_reports(get_reports(), 0)
            .into_iter()
            .map(|i| match i {
                QualityIssue::ConversionDrift { index, .. } => index,
                other => panic!("unexpected issue: {}", other),
            })
            .collect();

        let cities: Vec<&str> = drifted.iter().map(|i| get_reports()[*i].city.as_ref()).collect();
        assert_eq!(cities, vec!["Moscow", "Timbuktu", "Tokyo"]);
    }

    #[test]
    fn reports_empty_and_implausible_records() {
        let reports = vec![
            WeatherReport::from_static("", "Europe", "Clear", "http://x/a.gif", 32, 0),
            WeatherReport::from_static("Hot", "Africa", "Clear", "http://x/b.gif", 302, 150),
            WeatherReport::from_static("Off", "Asia", "Clear", "http://x/c.gif", 50, 0),
        ];
        let issues = check_reports(&reports, 1);

        assert_eq!(issues, vec![
            QualityIssue::EmptyField { index: 0, field: "city" },
            QualityIssue::ImplausibleTemperature { index: 1, temp_c: 150 },
            QualityIssue::ConversionDrift { index: 2, expected_f: 32, actual_f: 50 },
        ]);
        assert_eq!(issues[2].to_string(), "record 2: 50 °F given, 32 °F expected from Celsius reading");
    }
}
