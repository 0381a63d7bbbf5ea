use std::io::Error;
use std::path::Path;

/// Writes a batch file with a `bill,tip,round_up` header and the given rows.
pub fn write_batch(path: &Path, rows: &[[&str; 3]]) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;

    wtr.write_record(["bill", "tip", "round_up"])?;
    for row in rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes `rows` requests whose bill equals the row number, all at 10 %.
pub fn generate_batch(path: &Path, rows: usize) -> Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(["bill", "tip", "round_up"])?;

    for i in 1..=rows {
        wtr.write_record([i.to_string().as_str(), "10", "false"])?;
    }

    wtr.flush()?;
    Ok(())
}
