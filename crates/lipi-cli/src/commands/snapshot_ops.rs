//! Regression snapshots: one JSONL record per input line.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::process;

use serde::{Deserialize, Serialize};
use tracing::debug;

use lipi_core::Transliterator;

use super::parse_mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub input: String,
    pub composing: String,
    pub committed: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub fn record(t: &Transliterator, input: &str) -> SnapshotEntry {
    SnapshotEntry {
        input: input.to_string(),
        composing: t.transliterate(input, true),
        committed: t.transliterate(input, false),
    }
}

/// Non-empty lines that are not `#` comments, trimmed.
pub fn read_inputs<R: BufRead>(reader: R) -> Result<Vec<String>, SnapshotError> {
    let mut inputs = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            inputs.push(line.to_string());
        }
    }
    Ok(inputs)
}

pub fn write_jsonl<W: Write>(entries: &[SnapshotEntry], mut writer: W) -> Result<(), SnapshotError> {
    for (i, entry) in entries.iter().enumerate() {
        let line =
            serde_json::to_string(entry).map_err(|source| SnapshotError::Json { line: i + 1, source })?;
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<SnapshotEntry>, SnapshotError> {
    let mut entries = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let entry =
            serde_json::from_str(&line).map_err(|source| SnapshotError::Json { line: i + 1, source })?;
        entries.push(entry);
    }
    Ok(entries)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    /// `(baseline, current)` pairs whose output changed.
    pub changed: Vec<(SnapshotEntry, SnapshotEntry)>,
    pub added: Vec<SnapshotEntry>,
    pub removed: Vec<String>,
    pub same: usize,
}

impl SnapshotDiff {
    pub fn is_regression(&self) -> bool {
        !self.changed.is_empty() || !self.removed.is_empty()
    }
}

pub fn diff(baseline: &[SnapshotEntry], current: &[SnapshotEntry]) -> SnapshotDiff {
    let by_input: HashMap<&str, &SnapshotEntry> =
        baseline.iter().map(|e| (e.input.as_str(), e)).collect();
    let mut out = SnapshotDiff::default();
    for entry in current {
        match by_input.get(entry.input.as_str()) {
            Some(&base) if base == entry => out.same += 1,
            Some(&base) => out.changed.push((base.clone(), entry.clone())),
            None => out.added.push(entry.clone()),
        }
    }
    let seen: HashSet<&str> = current.iter().map(|e| e.input.as_str()).collect();
    out.removed = baseline
        .iter()
        .filter(|e| !seen.contains(e.input.as_str()))
        .map(|e| e.input.clone())
        .collect();
    out
}

fn load_inputs(input_file: &str) -> Vec<String> {
    let file = die!(fs::File::open(input_file), "Failed to open input file {input_file}: {}");
    die!(read_inputs(BufReader::new(file)), "Failed to read {input_file}: {}")
}

pub fn snapshot_cmd(mode: &str, input_file: &str, output_file: &str) {
    let mode = parse_mode(mode);
    let t = Transliterator::new(mode);
    let inputs = load_inputs(input_file);
    let entries: Vec<SnapshotEntry> = inputs.iter().map(|input| record(&t, input)).collect();

    let file = die!(
        fs::File::create(output_file),
        "Failed to create output file {output_file}: {}"
    );
    die!(write_jsonl(&entries, BufWriter::new(file)), "Failed to write: {}");
    debug!(%mode, cache_len = t.cache_len(), "snapshot recorded");
    eprintln!("Snapshot written: {} inputs -> {output_file}", entries.len());
}

pub fn diff_snapshot_cmd(mode: &str, input_file: &str, baseline_file: &str) {
    let mode = parse_mode(mode);
    let t = Transliterator::new(mode);
    let inputs = load_inputs(input_file);
    let current: Vec<SnapshotEntry> = inputs.iter().map(|input| record(&t, input)).collect();

    let file = die!(
        fs::File::open(baseline_file),
        "Failed to read baseline file {baseline_file}: {}"
    );
    let baseline = die!(read_jsonl(BufReader::new(file)), "Failed to parse baseline JSONL: {}");

    let d = diff(&baseline, &current);
    for (base, now) in &d.changed {
        println!(
            "  CHANGED: {} -> {} / {} (was: {} / {})",
            now.input, now.composing, now.committed, base.composing, base.committed
        );
    }
    for entry in &d.added {
        println!("  NEW:     {} -> {}", entry.input, entry.committed);
    }
    for input in &d.removed {
        println!("  REMOVED: {input}");
    }

    println!();
    println!("=== Summary ===");
    println!("  Total:    {}", current.len());
    println!("  Same:     {}", d.same);
    println!("  Changed:  {}", d.changed.len());
    println!("  New:      {}", d.added.len());
    println!("  Removed:  {}", d.removed.len());

    if d.is_regression() {
        process::exit(1);
    }
}
