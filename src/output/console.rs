use std::io::{self, Write};

use crate::astro::AU;
use crate::model::snapshot::Snapshot;
use crate::model::timeline::{Observer, ObserverResult};

/// Prints a small table of planet positions and velocities after every step.
pub struct ConsoleReport<W: Write = io::Stdout> {
    out: W,
}

impl ConsoleReport {
    pub fn stdout() -> Self {
        ConsoleReport { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        ConsoleReport { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Observer for ConsoleReport<W> {
    fn name(&self) -> &str {
        "console report"
    }

    fn on_step(&mut self, snapshot: &Snapshot) -> ObserverResult {
        writeln!(self.out, "Week {}", snapshot.step)?;
        for body in snapshot.bodies.iter().filter(|body| !body.fixed) {
            writeln!(
                self.out,
                "{:<8} | Pos (x, y): {:>6.2} {:>6.2} | Vel (m/s): {:>10.3} {:>10.3}",
                body.name,
                body.position.x / AU,
                body.position.y / AU,
                body.velocity.x,
                body.velocity.y,
            )?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Vector2;

    use super::*;
    use crate::model::orrery::{BodyInfo, Orrery};

    #[test]
    fn test_report_skips_anchor() {
        let mut orrery = Orrery::new();
        orrery
            .add_fixed_body(BodyInfo::named("Sun"), 1.0, Vector2::zeros(), Vector2::zeros())
            .unwrap();
        orrery
            .add_body(
                BodyInfo::named("Mars"),
                1.0,
                Vector2::new(1.524 * AU, -0.5 * AU),
                Vector2::new(1.5, 24100.0),
            )
            .unwrap();

        let mut report = ConsoleReport::new(Vec::new());
        report.on_step(&orrery.snapshot(7, 0.0)).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();

        assert_eq!(
            text,
            "Week 7\n\
             Mars     | Pos (x, y):   1.52  -0.50 | Vel (m/s):      1.500  24100.000\n\
             \n"
        );
    }
}
