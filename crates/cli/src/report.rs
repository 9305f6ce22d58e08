//! Output of the print modes.

use std::io::{self, Write};

use engine::FileRecord;
use schedule::Schedule;

/// Writes one threshold per line.
pub(crate) fn write_schedule<W: Write + ?Sized>(out: &mut W, schedule: &Schedule) -> io::Result<()> {
    for days in schedule {
        writeln!(out, "{days}")?;
    }
    Ok(())
}

/// Writes one record name per line.
pub(crate) fn write_names<'a, W, I>(out: &mut W, records: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a FileRecord>,
{
    for record in records {
        writeln!(out, "{}", record.name().display())?;
    }
    Ok(())
}
