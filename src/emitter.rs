use std::io::Write;

use clap::ValueEnum;
use derive_more::Display;
use serde::Serialize;

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
pub enum OutputFormat {
    #[default]
    #[display("plain")]
    Plain,
    #[display("json")]
    Json,
}

#[derive(Serialize)]
struct ValueLine {
    value: i32,
}

#[derive(Serialize)]
struct MeanLine {
    mean: f64,
}

/// Line-oriented sink for everything a walk prints.
///
/// Visitors cannot return errors, so the first failure (a write error, or an
/// overflow reported through [`Emitter::fail`]) is kept here and every later
/// write is skipped. Call [`Emitter::finish`] to get it back.
#[derive(Debug)]
pub struct Emitter<W> {
    out: W,
    format: OutputFormat,
    lines: usize,
    error: Option<Error>,
}

impl<W: Write> Emitter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            lines: 0,
            error: None,
        }
    }

    pub fn emit_value(&mut self, value: i32) {
        match self.format {
            OutputFormat::Plain => {
                self.write_line(|out| writeln!(out, "{value}").map_err(Error::from))
            }
            OutputFormat::Json => self.write_json(&ValueLine { value }),
        }
    }

    pub fn emit_mean(&mut self, mean: f64) {
        match self.format {
            OutputFormat::Plain => {
                self.write_line(|out| writeln!(out, "mean: {mean:?}").map_err(Error::from))
            }
            OutputFormat::Json => self.write_json(&MeanLine { mean }),
        }
    }

    /// Blank line between runs. JSON output stays one object per line.
    pub fn emit_separator(&mut self) {
        if self.format == OutputFormat::Plain {
            self.write_line(|out| writeln!(out).map_err(Error::from));
        }
    }

    /// Stops all further output and keeps `err` for [`Emitter::finish`],
    /// unless an earlier error is already kept.
    pub fn fail(&mut self, err: Error) {
        if self.error.is_some() {
            return;
        }
        tracing::error!("walk failed, dropping further lines: {err}");
        self.error = Some(err);
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Number of lines successfully written so far, separators included.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Flushes and returns the writer, or the first error seen.
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn write_json<T: Serialize>(&mut self, line: &T) {
        self.write_line(|out| {
            serde_json::to_writer(&mut *out, line)?;
            out.write_all(b"\n")?;
            Ok(())
        });
    }

    fn write_line<F>(&mut self, write: F)
    where
        F: FnOnce(&mut W) -> Result<()>,
    {
        if self.error.is_some() {
            return;
        }
        match write(&mut self.out) {
            Ok(()) => self.lines += 1,
            Err(err) => self.fail(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn plain_lines() -> Result<()> {
        let mut emitter = Emitter::new(vec![], OutputFormat::Plain);
        emitter.emit_value(3);
        emitter.emit_separator();
        emitter.emit_mean(2.0);
        assert_eq!(emitter.lines(), 3);

        let out = String::from_utf8(emitter.finish()?)?;
        assert_eq!(out, "3\n\nmean: 2.0\n");
        Ok(())
    }

    #[test]
    fn json_lines_skip_separator() -> Result<()> {
        let mut emitter = Emitter::new(vec![], OutputFormat::Json);
        assert_eq!(emitter.format(), OutputFormat::Json);
        emitter.emit_value(-4);
        emitter.emit_separator();
        emitter.emit_mean(2.5);

        let out = String::from_utf8(emitter.finish()?)?;
        assert_eq!(out, "{\"value\":-4}\n{\"mean\":2.5}\n");
        Ok(())
    }

    #[test]
    fn first_write_error_is_kept() {
        let mut emitter = Emitter::new(BrokenPipe, OutputFormat::Plain);
        emitter.emit_value(1);
        emitter.emit_value(2);
        assert_eq!(emitter.lines(), 0);
        assert!(matches!(emitter.finish(), Err(Error::Io(_))));
    }

    #[test]
    fn failure_keeps_earlier_lines_and_drops_later_ones() {
        let mut emitter = Emitter::new(vec![], OutputFormat::Plain);
        emitter.emit_value(1);
        emitter.fail(Error::Overflow {
            value: i32::MAX,
            amount: 1,
        });
        emitter.fail(Error::EmptyMean);
        emitter.emit_value(2);

        assert!(emitter.has_failed());
        assert_eq!(emitter.lines(), 1);
        assert!(matches!(
            emitter.finish(),
            Err(Error::Overflow { value: i32::MAX, amount: 1 })
        ));
    }
}
