use std::io::{self, Write};

use log::warn;

use crate::error::{Result, WorkoutError};
use crate::registry::read_package;
use crate::storage::Package;
use crate::training::Training;
use crate::types::InfoMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One summary per package, input order kept. A bad package does not stop the batch.
pub fn process_packages(packages: &[Package]) -> Vec<Result<InfoMessage>> {
    packages
        .iter()
        .map(|p| read_package(&p.workout_type, &p.data).map(|w| w.show_training_info()))
        .collect()
}

/// Render one output line per successful package. Failures are logged and counted.
pub fn render_report(packages: &[Package], format: OutputFormat) -> (Vec<String>, usize) {
    let mut lines = Vec::with_capacity(packages.len());
    let mut failed = 0usize;

    for (pkg, res) in packages.iter().zip(process_packages(packages)) {
        match res.and_then(|info| render_line(&info, format)) {
            Ok(line) => lines.push(line),
            Err(e) => {
                warn!("package {} {:?} skipped: {}", pkg.workout_type, pkg.data, e);
                failed += 1;
            }
        }
    }

    (lines, failed)
}

fn render_line(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => serde_json::to_string(&info.rounded())
            .map_err(|e| WorkoutError::Io(io::Error::from(e))),
    }
}

/// Print the report to `out`. Returns the number of packages that failed.
pub fn print_training_report<W: Write>(
    packages: &[Package],
    format: OutputFormat,
    out: &mut W,
) -> Result<usize> {
    let (lines, failed) = render_report(packages, format);
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(failed)
}
