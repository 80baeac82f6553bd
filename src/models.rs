use std::borrow::Cow;
use serde::{Deserialize, Serialize};
use crate::errors::FixtureError;

/// One city's weather snapshot
///
/// Text fields are `Cow<'static, str>` so the fixture can live in a `static` while records
/// parsed back from the interchange format own their text.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WeatherReport {
    pub city: Cow<'static, str>,
    pub continent: Cow<'static, str>,
    pub condition: Cow<'static, str>,
    pub icon: Cow<'static, str>,
    pub temp_f: i32,
    pub temp_c: i32,
}

impl WeatherReport {
    /// Builds a report from static text, usable in const context
    ///
    /// # Arguments
    ///
    /// * 'city' - place name, possibly with a qualifier
    /// * 'continent' - grouping label
    /// * 'condition' - short weather description
    /// * 'icon' - URL of the condition icon
    /// * 'temp_f' - temperature in degrees Fahrenheit
    /// * 'temp_c' - temperature in degrees Celsius
    pub const fn from_static(
        city: &'static str,
        continent: &'static str,
        condition: &'static str,
        icon: &'static str,
        temp_f: i32,
        temp_c: i32,
    ) -> WeatherReport {
        WeatherReport {
            city: Cow::Borrowed(city),
            continent: Cow::Borrowed(continent),
            condition: Cow::Borrowed(condition),
            icon: Cow::Borrowed(icon),
            temp_f,
            temp_c,
        }
    }

    /// Returns the text fields as (name, value) pairs, in schema order
    pub fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("city", self.city.as_ref()),
            ("continent", self.continent.as_ref()),
            ("condition", self.condition.as_ref()),
            ("icon", self.icon.as_ref()),
        ]
    }
}

/// Interchange envelope, `{ "reports": [ ... ] }`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WeatherReports {
    pub reports: Vec<WeatherReport>,
}

impl WeatherReports {
    /// Serializes the envelope to JSON
    ///
    /// # Arguments
    ///
    /// * 'pretty' - whether to indent the output
    pub fn to_json(&self, pretty: bool) -> Result<String, FixtureError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };

        Ok(json)
    }

    /// Parses an envelope from JSON and checks it against the fixture schema
    ///
    /// Missing fields, unknown fields and wrong value types are rejected by the parser,
    /// empty text fields are rejected afterwards.
    ///
    /// # Arguments
    ///
    /// * 'json' - the JSON document
    pub fn from_json(json: &str) -> Result<WeatherReports, FixtureError> {
        let reports: WeatherReports = serde_json::from_str(json)?;

        for (index, report) in reports.reports.iter().enumerate() {
            if let Some((field, _)) = report.text_fields().into_iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(FixtureError::MalformedFixture(format!("record {}: field '{}' is empty", index, field)));
            }
        }

        Ok(reports)
    }
}
