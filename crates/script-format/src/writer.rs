//! Single-pass script file writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use celestial::{CelestialObject, DistanceUnit};

use crate::formatter::format_object;

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to write script file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the batch to `path`, one block per object, blank line between
/// blocks. A failure part-way through may leave a partial file behind;
/// the caller decides whether to keep it.
pub fn write_script(
    objects: &[CelestialObject],
    distance_unit: DistanceUnit,
    reference_plane: &str,
    path: &Path,
) -> Result<(), WriteError> {
    let mut writer = BufWriter::new(File::create(path)?);

    for object in objects {
        writer.write_all(format_object(object, distance_unit, reference_plane).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    info!(
        count = objects.len(),
        path = %path.display(),
        "script generation complete"
    );
    Ok(())
}
