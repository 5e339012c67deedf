use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::astro::AU;
use crate::model::snapshot::Snapshot;
use crate::model::timeline::{Observer, ObserverResult};

/// Writes one line per step to a text file.
///
/// The file is opened once, when the log is created, and closed when the log
/// is dropped, whether or not the run got to the end.
pub struct StateLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl StateLog {
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_owned();
        let writer = BufWriter::new(File::create(&path)?);
        Ok(StateLog { path, writer })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Renders every body in a snapshot on a single line.
pub fn format_line(snapshot: &Snapshot) -> String {
    snapshot
        .bodies
        .iter()
        .map(|body| {
            format!(
                "Week: {:3}  {:4}   Position ={:6.2} {:6.2}  Velocity ={:10.2} {:10.2}",
                snapshot.step,
                body.name,
                body.position.x / AU,
                body.position.y / AU,
                body.velocity.x,
                body.velocity.y,
            )
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

impl Observer for StateLog {
    fn name(&self) -> &str {
        "state log"
    }

    fn on_step(&mut self, snapshot: &Snapshot) -> ObserverResult {
        writeln!(self.writer, "{}", format_line(snapshot))?;
        Ok(())
    }

    fn on_finish(&mut self, history: &[Snapshot]) -> ObserverResult {
        self.writer.flush()?;
        log::info!(
            "Wrote {} steps to {}",
            history.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2;

    use super::*;
    use crate::model::orrery::{BodyInfo, Orrery};

    #[test]
    fn test_format_line() {
        let mut orrery = Orrery::new();
        orrery
            .add_fixed_body(BodyInfo::named("Sun"), 1.0, Vector2::zeros(), Vector2::new(0.004, 0.0))
            .unwrap();
        orrery
            .add_body(
                BodyInfo::named("Earth"),
                1.0,
                Vector2::new(AU, 0.25 * AU),
                Vector2::new(-7000.0, 29783.0),
            )
            .unwrap();

        assert_eq!(
            format_line(&orrery.snapshot(12, 0.0)),
            "Week:  12  Sun    Position =  0.00   0.00  Velocity =      0.00       0.00 | \
             Week:  12  Earth   Position =  1.00   0.25  Velocity =  -7000.00   29783.00"
        );
    }
}
