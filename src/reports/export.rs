use super::Tabular;
use snoozer::error::SnResult;
use std::path::Path;
use tracing::info;

pub fn write_csv<P: AsRef<Path>>(path: P, table: &Tabular) -> SnResult<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    info!("💾 Wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}
