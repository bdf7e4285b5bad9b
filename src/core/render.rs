//! Output emission
//!
//! Emits one line per match as the walk discovers it. Matches are never
//! buffered into a result set: a caller piping into `head` or `wc -l`
//! observes results incrementally.

use std::io::Write;

use crate::core::model::MatchRecord;

/// Output format for match records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Writes match records to an output stream, one per line.
pub struct Emitter<W: Write> {
    format: OutputFormat,
    out: W,
}

impl<W: Write> Emitter<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self { format, out }
    }

    /// Emit a single match record.
    pub fn emit(&mut self, record: &MatchRecord<'_>) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", record.path),
            OutputFormat::Jsonl => {
                let line = serde_json::to_string(record)?;
                writeln!(self.out, "{}", line)
            }
        }
    }

    /// Consume the emitter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::EntryKind;

    #[test]
    fn test_parse_format() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!(
            "JSONL".parse::<OutputFormat>().unwrap(),
            OutputFormat::Jsonl
        );
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_emission() {
        let mut emitter = Emitter::new(OutputFormat::Text, Vec::new());
        emitter
            .emit(&MatchRecord {
                path: "root/src/main.c",
                kind: EntryKind::File,
            })
            .unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(out, "root/src/main.c\n");
    }

    #[test]
    fn test_jsonl_emission() {
        let mut emitter = Emitter::new(OutputFormat::Jsonl, Vec::new());
        emitter
            .emit(&MatchRecord {
                path: "root/src/",
                kind: EntryKind::Dir,
            })
            .unwrap();
        let out = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(out, "{\"path\":\"root/src/\",\"kind\":\"dir\"}\n");
    }
}
