//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::simulator::StreakResult;

pub struct OutputWriter {
    jsonl_writer: BufWriter<File>,
    csv_writer: csv::Writer<BufWriter<File>>,
    jsonl_path: PathBuf,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let jsonl_path = output_dir.join(format!("shuffle_{timestamp}.jsonl"));
        let jsonl_writer = BufWriter::new(create_truncating(&jsonl_path)?);

        let csv_path = output_dir.join(format!("shuffle_{timestamp}_summary.csv"));
        let mut csv_writer = csv::Writer::from_writer(BufWriter::new(create_truncating(&csv_path)?));
        csv_writer.write_record([
            "streak_no",
            "seed",
            "visited",
            "distinct_games",
            "immediate_repeats",
            "tips_shown",
            "full_coverage_at",
        ])?;

        Ok(Self {
            jsonl_writer,
            csv_writer,
            jsonl_path,
            csv_path,
        })
    }

    pub fn write_streak(&mut self, result: &StreakResult) -> Result<(), Box<dyn std::error::Error>> {
        serde_json::to_writer(&mut self.jsonl_writer, result)?;
        self.jsonl_writer.write_all(b"\n")?;

        self.csv_writer.write_record([
            result.streak_no.to_string(),
            result.seed.to_string(),
            result.visited.len().to_string(),
            result.distinct_games.to_string(),
            result.immediate_repeats.to_string(),
            result.tips_at.len().to_string(),
            result
                .full_coverage_at
                .map(|i| i.to_string())
                .unwrap_or_default(),
        ])?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&Path, &Path) {
        (&self.jsonl_path, &self.csv_path)
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.jsonl_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }
}

fn create_truncating(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}
