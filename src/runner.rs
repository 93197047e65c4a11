use std::io::Write;

use derive_more::Display;
use tracing::{debug, info};

use crate::emitter::{Emitter, OutputFormat};
use crate::sequence::Sequence;
use crate::visitors::{Add, Increment, Mean, Print, add_and_emit};
use crate::walker::{walk, walk_mut};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Pattern {
    #[display("print")]
    Print,
    #[display("increment")]
    Increment,
    #[display("add({_0})")]
    Add(i32),
    #[display("mean")]
    Mean,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkConfig {
    pub len: usize,
    pub start: i32,
    pub repeat: usize,
    pub format: OutputFormat,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            len: 5,
            start: 0,
            repeat: 1,
            format: OutputFormat::Plain,
        }
    }
}

impl WalkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.repeat == 0 {
            return Err(Error::InvalidConfig("repeat must be at least 1".into()));
        }
        Ok(())
    }

    /// The sequence every run starts from.
    pub fn sequence(&self) -> Result<Sequence> {
        Sequence::iota(self.len, self.start)
    }
}

/// Walks `sequence` once with `pattern`. For [`Pattern::Mean`] the derived
/// value is written after the elements and returned.
pub fn run_pattern<W: Write>(
    pattern: Pattern,
    sequence: &mut Sequence,
    out: &mut Emitter<W>,
) -> Result<Option<f64>> {
    debug!(%pattern, len = sequence.len(), "running pattern");
    match pattern {
        Pattern::Print => {
            walk(sequence, Print::new(out));
        }
        Pattern::Increment => {
            walk_mut(sequence, Increment::new(out));
        }
        Pattern::Add(amount) => {
            walk_mut(sequence, Add::new(amount, out));
        }
        Pattern::Mean => {
            let mean = walk(sequence, Mean::new(out));
            let value = mean.mean()?;
            if let Some(out) = mean.into_emitter() {
                out.emit_mean(value);
            }
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Builds the sequence from `config` and runs `pattern` on it `repeat`
/// times, with a separator between runs. Returns the sequence as the last
/// run left it, or the first error, e.g. [`Error::Overflow`] when a
/// mutating pattern pushes an element out of `i32`.
pub fn run<W: Write>(pattern: Pattern, config: &WalkConfig, writer: W) -> Result<Sequence> {
    config.validate()?;
    let mut sequence = config.sequence()?;
    let mut out = Emitter::new(writer, config.format);

    for round in 0..config.repeat {
        if out.has_failed() {
            break;
        }
        if round > 0 {
            out.emit_separator();
        }
        if let Some(mean) = run_pattern(pattern, &mut sequence, &mut out)? {
            info!(round, mean, "derived value");
        }
    }

    info!(%pattern, lines = out.lines(), "walk finished");
    out.finish()?;
    Ok(sequence)
}

/// The classic for-each tour on a single sequence: print it with a closure
/// and with a visitor, increment it both ways, then add two. Sections are
/// separated by a blank line.
pub fn run_demo<W: Write>(config: &WalkConfig, writer: W) -> Result<Sequence> {
    config.validate()?;
    let mut sequence = config.sequence()?;
    let mut out = Emitter::new(writer, config.format);

    walk(&sequence, |n: i32| out.emit_value(n));
    out.emit_separator();

    walk(&sequence, Print::new(&mut out));
    out.emit_separator();

    walk_mut(&mut sequence, |n: &mut i32| add_and_emit(n, 1, &mut out));
    out.emit_separator();

    walk_mut(&mut sequence, Increment::new(&mut out));
    out.emit_separator();

    walk_mut(&mut sequence, Add::new(2, &mut out));

    info!(lines = out.lines(), "demo finished");
    out.finish()?;
    Ok(sequence)
}
