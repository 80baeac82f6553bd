use std::fs::File;
use std::io::{self, BufWriter, Write};
use log::info;
use crate::config::Output;
use crate::errors::FixtureError;
use crate::models::{WeatherReport, WeatherReports};

/// The sample weather reports shown by the table view guide, in display order
#[rustfmt::skip]
pub static REPORTS: [WeatherReport; 19] = [
    WeatherReport::from_static("Mountain View", "North America", "Cloudy",
        "http://www.google.com/ig/images/weather/cloudy.gif", 66, 19),
    WeatherReport::from_static("Washington, DC", "North America", "Mostly Cloudy",
        "http://www.google.com/ig/images/weather/mostly_cloudy.gif", 37, 3),
    WeatherReport::from_static("Brasilia", "South America", "Thunderstorm",
        "http://www.google.com/ig/images/weather/thunderstorm.gif", 79, 26),
    WeatherReport::from_static("Buenos Aires", "South America", "Clear",
        "http://www.google.com/ig/images/weather/sunny.gif", 73, 23),
    WeatherReport::from_static("Sucre", "South America", "Mostly Cloudy",
        "http://www.google.com/ig/images/weather/mostly_cloudy.gif", 68, 20),
    WeatherReport::from_static("London", "Europe", "Overcast",
        "http://www.google.com/ig/images/weather/cloudy.gif", 43, 6),
    WeatherReport::from_static("Moscow", "Europe", "Partly Cloudy",
        "http://www.google.com/ig/images/weather/partly_cloudy.gif", 26, -3),
    WeatherReport::from_static("Prague", "Europe", "Clear",
        "http://www.google.com/ig/images/weather/sunny.gif", 27, -3),
    WeatherReport::from_static("St Petersburg", "Europe", "Snow",
        "http://www.google.com/ig/images/weather/snow.gif", 21, -6),
    WeatherReport::from_static("Cape Town", "Africa", "Partly Cloudy",
        "http://www.google.com/ig/images/weather/partly_cloudy.gif", 68, 20),
    WeatherReport::from_static("Timbuktu", "Africa", "Clear",
        "http://www.google.com/ig/images/weather/sunny.gif", 83, 28),
    WeatherReport::from_static("Bangalore", "Asia", "Partly Cloudy",
        "http://www.google.com/ig/images/weather/partly_cloudy.gif", 72, 22),
    WeatherReport::from_static("Beijing", "Asia", "Clear",
        "http://www.google.com/ig/images/weather/sunny.gif", 21, -6),
    WeatherReport::from_static("Chennai", "Asia", "Haze",
        "http://www.google.com/ig/images/weather/haze.gif", 79, 26),
    WeatherReport::from_static("Shanghai", "Asia", "Mostly Sunny",
        "http://www.google.com/ig/images/weather/mostly_sunny.gif", 52, 11),
    WeatherReport::from_static("Tokyo", "Asia", "Clear",
        "http://www.google.com/ig/images/weather/sunny.gif", 38, 3),
    WeatherReport::from_static("Canberra", "Australia", "Partly Cloudy",
        "http://www.google.com/ig/images/weather/partly_cloudy.gif", 55, 13),
    WeatherReport::from_static("Sydney", "Australia", "Partly Cloudy",
        "http://www.google.com/ig/images/weather/partly_cloudy.gif", 66, 19),
    WeatherReport::from_static("Port Moresby", "Australia", "Partly Cloudy",
        "http://www.google.com/ig/images/weather/partly_cloudy.gif", 79, 26),
];

/// Returns the full fixture in source order
pub fn get_reports() -> &'static [WeatherReport] {
    &REPORTS
}

/// Returns an owned copy of the fixture wrapped in the interchange envelope
pub fn to_owned_reports() -> WeatherReports {
    WeatherReports { reports: REPORTS.to_vec() }
}

/// Writes the fixture in interchange format, followed by a newline
///
/// # Arguments
///
/// * 'writer' - destination of the JSON document
/// * 'pretty' - whether to indent the output
pub fn write_reports<W: Write>(mut writer: W, pretty: bool) -> Result<(), FixtureError> {
    let json = to_owned_reports().to_json(pretty)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

/// Exports the fixture to the configured file, or to stdout when no file is configured
///
/// # Arguments
///
/// * 'output' - output configuration
pub fn export(output: &Output) -> Result<(), FixtureError> {
    match &output.path {
        Some(path) => {
            let file = File::create(path)?;
            write_reports(BufWriter::new(file), output.pretty)?;
            info!("wrote {} reports to {}", REPORTS.len(), path);
        },
        None => write_reports(io::stdout().lock(), output.pretty)?,
    }

    Ok(())
}

/// Groups reports on continent
///
/// Groups come in order of each continent's first appearance, and reports within a group
/// keep their relative order.
///
/// # Arguments
///
/// * 'reports' - reports to group
pub fn group_by_continent(reports: &[WeatherReport]) -> Vec<(&str, Vec<&WeatherReport>)> {
    let mut groups: Vec<(&str, Vec<&WeatherReport>)> = Vec::new();

    for report in reports {
        match groups.iter().position(|(c, _)| *c == report.continent.as_ref()) {
            Some(i) => groups[i].1.push(report),
            None => groups.push((report.continent.as_ref(), vec![report])),
        }
    }

    groups
}
