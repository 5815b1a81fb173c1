//! Step-by-step replay of character placements.
//!
//! The playback state is owned here, by the presentation layer, and built
//! fresh for every run. The engine itself stays stateless.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use railfence::{grid_lines, RailMatrix, TraceStep, Transposition};

pub struct Playback<'a> {
    result: &'a Transposition,
    current_step: usize,
}

impl<'a> Playback<'a> {
    pub fn new(result: &'a Transposition) -> Self {
        Self {
            result,
            current_step: 0,
        }
    }

    /// Reveals the next placement; `None` once every cell is shown.
    pub fn step(&mut self) -> Option<TraceStep> {
        let step = self.result.trace.get(self.current_step).copied()?;
        self.current_step += 1;
        Some(step)
    }

    pub fn reset(&mut self) {
        self.current_step = 0;
    }

    pub fn is_finished(&self) -> bool {
        self.current_step >= self.result.trace.len()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The grid with only the placements revealed so far.
    pub fn frame(&self) -> RailMatrix {
        RailMatrix::from_trace(
            self.result.rails,
            self.result.matrix.columns(),
            &self.result.trace[..self.current_step],
        )
    }

    /// Replays every step from the start to `out`, pausing `delay` between
    /// frames.
    pub fn run<W: Write>(&mut self, out: &mut W, delay: Duration) -> io::Result<()> {
        self.reset();
        let total = self.result.trace.len();

        while let Some(step) = self.step() {
            writeln!(
                out,
                "Step {}/{}: '{}' -> rail {}, column {}",
                self.current_step(),
                total,
                step.ch,
                step.rail + 1,
                step.column + 1
            )?;
            for line in grid_lines(&self.frame()) {
                writeln!(out, "  {}", line)?;
            }
            writeln!(out)?;
            out.flush()?;

            if !delay.is_zero() && !self.is_finished() {
                thread::sleep(delay);
            }
        }

        Ok(())
    }
}
