#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;

/// Header line of a curated interaction dump with the columns signet needs.
pub const INTERACTION_HEADER: &str =
    "source\ttarget\tconsensus_direction\tconsensus_stimulation\tconsensus_inhibition";

/// Build a minimal interaction table from raw data rows.
pub fn interaction_table(rows: &[&str]) -> String {
    let mut table = String::from(INTERACTION_HEADER);
    table.push('\n');
    for row in rows {
        table.push_str(row);
        table.push('\n');
    }
    table
}

/// Write an interaction table fixture into `dir` and return its path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

/// Runs the Signet CLI with the given arguments.
pub fn run_signet(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("signet").unwrap();
    cmd.args(args);
    cmd.assert()
}

/// Runs an extraction from `input` into `output` and asserts success.
pub fn extract_to(input: &str, output: &str, format: &str) {
    run_signet(&["-i", input, "-o", output, "-f", format, "-q"]).success();
}
