//! Output writers for simulation results.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::metrics::{CsvSummaryRow, GameRecord};
use crate::types::OutputFormat;

pub struct OutputWriter {
    records_writer: Box<dyn Write + Send>,
    format: OutputFormat,
    /// Games buffered for the single-array JSON format.
    buffered: Vec<GameRecord>,
    csv_writer: csv::Writer<BufWriter<File>>,
    records_path: PathBuf,
    csv_path: PathBuf,
}

fn create(path: &Path) -> std::io::Result<File> {
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

/// File-name safe UTC timestamp.
pub fn file_timestamp() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .unwrap_or_else(|_| "unknown".to_string())
        .replace(':', "-")
}

impl OutputWriter {
    pub fn new(
        output_dir: &str,
        format: &OutputFormat,
        compress: bool,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = Path::new(output_dir);
        std::fs::create_dir_all(dir)?;
        let timestamp = file_timestamp();

        let extension = match format {
            OutputFormat::Jsonl => "jsonl",
            OutputFormat::Json => "json",
        };
        let mut records_path = dir.join(format!("simulation_{timestamp}.{extension}"));
        let records_writer: Box<dyn Write + Send> = if compress {
            records_path = dir.join(format!("simulation_{timestamp}.{extension}.gz"));
            Box::new(BufWriter::new(GzEncoder::new(
                create(&records_path)?,
                Compression::default(),
            )))
        } else {
            Box::new(BufWriter::new(create(&records_path)?))
        };

        let csv_path = dir.join(format!("simulation_{timestamp}_summary.csv"));
        let csv_writer = csv::Writer::from_writer(BufWriter::new(create(&csv_path)?));

        Ok(Self {
            records_writer,
            format: format.clone(),
            buffered: Vec::new(),
            csv_writer,
            records_path,
            csv_path,
        })
    }

    pub fn write_game(&mut self, record: &GameRecord) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Jsonl => {
                let json = serde_json::to_string(record)?;
                writeln!(self.records_writer, "{json}")?;
            }
            OutputFormat::Json => self.buffered.push(record.clone()),
        }

        let row: CsvSummaryRow = record.into();
        self.csv_writer.serialize(&row)?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        if matches!(self.format, OutputFormat::Json) {
            serde_json::to_writer_pretty(&mut self.records_writer, &self.buffered)?;
            writeln!(self.records_writer)?;
        }
        self.records_writer.flush()?;
        self.csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (&PathBuf, &PathBuf) {
        (&self.records_path, &self.csv_path)
    }
}
