use serde::Serialize;

/// Write one CSV row per item; the header comes from the field names.
pub(crate) fn export_rows_impl<T: Serialize>(
    rows: &[T],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
