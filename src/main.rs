use anyhow::Result;
use log::{error, info, warn};
use weather_fixture::initialization::init;
use weather_fixture::quality::check_reports;
use weather_fixture::{export, get_reports, group_by_continent};

fn main() -> Result<()> {
    // Without config and logging there is nothing to report to, so just bail out
    let config = init()?;

    let reports = get_reports();
    for (continent, members) in group_by_continent(reports) {
        info!("{}: {} reports", continent, members.len());
    }

    for issue in check_reports(reports, config.quality.tolerance) {
        warn!("{}", issue);
    }

    if let Err(e) = export(&config.output) {
        error!("Export failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
