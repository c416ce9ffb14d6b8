use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::error::SampleError;
use crate::samples::Sample;

/// The narration recorded by one sample run.
///
/// Samples never print directly; they push lines here and the caller decides
/// whether to render text or JSON.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    /// Set by `Sample::run`; hand-built transcripts leave it empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<Sample>,
    pub title: String,
    pub lines: Vec<String>,
    pub key_points: Vec<String>,
}

impl Transcript {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Starts a new block of lines under a heading.
    pub fn section(&mut self, heading: impl Into<String>) {
        if !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.lines.push(format!("--- {} ---", heading.into()));
    }

    pub fn key_point(&mut self, point: impl Into<String>) {
        self.key_points.push(point.into());
    }

    pub fn contains_line(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", format!("=== {} ===", self.title).bold().cyan())?;
        writeln!(out)?;

        for line in &self.lines {
            if line.starts_with("--- ") {
                writeln!(out, "{}", line.yellow())?;
            } else {
                writeln!(out, "{}", line)?;
            }
        }

        if !self.key_points.is_empty() {
            writeln!(out)?;
            writeln!(out, "{}", "=== Key Points ===".bold().green())?;
            for (i, point) in self.key_points.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, point)?;
            }
        }
        writeln!(out)
    }
}

pub fn to_json(transcripts: &[Transcript]) -> Result<String, SampleError> {
    Ok(serde_json::to_string_pretty(transcripts)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transcript {
        let mut t = Transcript::new("HashMap: String => String");
        t.line("Anne's favourite film is: LaLa Land");
        t.section("Entries");
        t.line("Person: Zoe, Film: Trainspotting");
        t.key_point("Keys are unique");
        t
    }

    #[test]
    fn test_section_inserts_separator() {
        let t = sample();
        assert_eq!(t.lines[1], "");
        assert_eq!(t.lines[2], "--- Entries ---");
        assert!(t.contains_line("Trainspotting"));
        assert!(!t.contains_line("Alien"));
    }

    #[test]
    fn test_write_text_includes_key_points() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        sample().write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("=== HashMap: String => String ==="));
        assert!(text.contains("1. Keys are unique"));
    }

    #[test]
    fn test_json_round_trip_shape() {
        let json = to_json(&[sample()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "HashMap: String => String");
        assert_eq!(value[0]["key_points"][0], "Keys are unique");
        assert!(value[0].get("sample").is_none());
    }

    #[test]
    fn test_json_names_the_sample() {
        let t = Sample::TreeSetWithComparator
            .run(&crate::config::Settings::default())
            .unwrap();
        let json = to_json(&[t]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["sample"], "tree-set-with-comparator");
    }
}
