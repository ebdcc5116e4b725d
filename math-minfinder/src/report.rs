//! Output of discovered minima
//!
//! The driver only produces data. This module turns reports into a text
//! listing, CSV rows or JSON. Opening and closing the destination belongs to
//! the caller.

use crate::annealing::AnnealingReport;
use crate::multistart::{DiscoveryEvent, MultiStartReport};
use crate::{MinFinderError, Result, RunParameters};
use serde::Serialize;
use std::io::Write;

const BANNER: &str = "-------------------------------------------";

/// Writes a human-readable listing, one block per function.
#[derive(Debug)]
pub struct ResultsWriter<W: Write> {
    out: W,
}

impl<W: Write> ResultsWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the banner that opens a function's block.
    ///
    /// `seed` is the one the run actually used, so the block can be replayed
    /// with `--seed`.
    pub fn write_header(&mut self, label: &str, seed: u64) -> Result<()> {
        writeln!(self.out, "{}", BANNER)?;
        writeln!(self.out, "Run for function: {}", label)?;
        writeln!(self.out, "Seed: {}", seed)?;
        writeln!(self.out, "{}", BANNER)?;
        Ok(())
    }

    /// Writes one discovery line: coordinates, then the objective value.
    pub fn write_discovery(&mut self, event: &DiscoveryEvent) -> Result<()> {
        write!(self.out, "New local minimum found: ")?;
        for xi in event.x.iter() {
            write!(self.out, "{} ", xi)?;
        }
        writeln!(self.out, "f(x) = {}", event.value)?;
        Ok(())
    }

    /// Writes a whole run: banner followed by every discovery in order.
    pub fn write_report(&mut self, label: &str, report: &MultiStartReport) -> Result<()> {
        self.write_header(label, report.seed)?;
        for event in &report.events {
            self.write_discovery(event)?;
        }
        Ok(())
    }

    /// Writes the result of an annealing run.
    pub fn write_annealing(&mut self, report: &AnnealingReport) -> Result<()> {
        write!(self.out, "Simulated annealing best: ")?;
        for xi in report.x.iter() {
            write!(self.out, "{} ", xi)?;
        }
        writeln!(self.out, "f(x) = {}", report.fun)?;
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Writes discoveries as CSV, one row per event, header on first use.
#[derive(Debug)]
pub struct CsvWriter<W: Write> {
    out: W,
    dimension: Option<usize>,
}

impl<W: Write> CsvWriter<W> {
    /// Wraps `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            dimension: None,
        }
    }

    fn write_header(&mut self, dimension: usize) -> Result<()> {
        write!(self.out, "function,index,iteration,sample,")?;
        for i in 0..dimension {
            write!(self.out, "x{},", i)?;
        }
        writeln!(self.out, "f_value")?;
        self.dimension = Some(dimension);
        Ok(())
    }

    /// Appends every discovery of `report` under `function`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the points do not match the column
    /// layout fixed by the first row, or `Io` on write failure.
    pub fn write_run(&mut self, function: &str, report: &MultiStartReport) -> Result<()> {
        for event in &report.events {
            let dim = event.x.len();
            match self.dimension {
                None => self.write_header(dim)?,
                Some(expected) if expected != dim => {
                    return Err(MinFinderError::DimensionMismatch { expected, got: dim });
                }
                Some(_) => {}
            }
            write!(
                self.out,
                "{},{},{},{},",
                function, event.index, event.iteration, event.sample
            )?;
            for &xi in event.x.iter() {
                write!(self.out, "{:.16},", xi)?;
            }
            writeln!(self.out, "{:.16}", event.value)?;
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// One function's run, as written to JSON.
#[derive(Debug, Serialize)]
pub struct FunctionRun<'a> {
    /// Registry name of the function
    pub function: &'a str,
    /// Parameters the run used
    pub parameters: &'a RunParameters,
    /// What the run found
    pub report: &'a MultiStartReport,
    /// Optional annealing result for the same function
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annealing: Option<&'a AnnealingReport>,
}

/// Writes all runs as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut out: W, runs: &[FunctionRun<'_>]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, runs)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::multistart::MinimumRecord;
    use ndarray::array;

    fn sample_report() -> MultiStartReport {
        let events = vec![
            DiscoveryEvent {
                index: 0,
                iteration: 0,
                sample: 1,
                x: array![0.5, -0.25],
                value: -1.5,
            },
            DiscoveryEvent {
                index: 1,
                iteration: 2,
                sample: 3,
                x: array![2.0, 1.0],
                value: 4.0,
            },
        ];
        let minima = events
            .iter()
            .map(|e| MinimumRecord {
                x: e.x.clone(),
                value: e.value,
            })
            .collect();
        MultiStartReport {
            minima,
            events,
            seed: 7,
            attempts: 20,
            ..MultiStartReport::default()
        }
    }

    #[test]
    fn test_text_listing() {
        let mut writer = ResultsWriter::new(Vec::new());
        writer.write_report("Camel", &sample_report()).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], BANNER);
        assert_eq!(lines[1], "Run for function: Camel");
        assert_eq!(lines[2], "Seed: 7");
        assert_eq!(lines[3], BANNER);
        assert_eq!(lines[4], "New local minimum found: 0.5 -0.25 f(x) = -1.5");
        assert_eq!(lines[5], "New local minimum found: 2 1 f(x) = 4");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_text_listing_without_discoveries() {
        let mut writer = ResultsWriter::new(Vec::new());
        writer
            .write_report("Griewank", &MultiStartReport::default())
            .unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("Seed: 0"));
    }

    #[test]
    fn test_csv_rows() {
        let mut writer = CsvWriter::new(Vec::new());
        writer.write_run("camel", &sample_report()).unwrap();
        writer.write_run("branin", &sample_report()).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "function,index,iteration,sample,x0,x1,f_value");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("camel,0,0,1,0.5000000000000000,"));
        assert!(lines[4].starts_with("branin,1,2,3,"));
    }

    #[test]
    fn test_csv_rejects_mixed_dimensions() {
        let mut writer = CsvWriter::new(Vec::new());
        writer.write_run("camel", &sample_report()).unwrap();

        let mut wide = sample_report();
        wide.events[0].x = array![1.0, 2.0, 3.0];
        let err = writer.write_run("other", &wide).unwrap_err();
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_json_output() {
        let params = RunParameters::default();
        let report = sample_report();
        let runs = [FunctionRun {
            function: "camel",
            parameters: &params,
            report: &report,
            annealing: None,
        }];
        let mut buf = Vec::new();
        write_json(&mut buf, &runs).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["function"], "camel");
        assert_eq!(value[0]["report"]["seed"], 7);
        assert_eq!(value[0]["report"]["minima"][1]["x"][0], 2.0);
        assert_eq!(value[0]["parameters"]["sample_size"], 5);
        assert!(value[0].get("annealing").is_none());
    }
}
