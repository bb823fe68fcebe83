use crate::metrics::FleetReport;

pub(crate) fn export_to_json_impl(
    report: &FleetReport,
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
