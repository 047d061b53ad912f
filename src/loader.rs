//! Line-oriented dataset loader.
//!
//! Datasets are whitespace-delimited text files with two record kinds:
//!
//! ```text
//! USER <id>
//! FRIEND <id1> <id2>
//! ```
//!
//! Blank lines are skipped. Any other line is malformed; loading logs a
//! warning and continues, since a partially readable dataset is still a
//! usable graph. Only I/O errors abort a load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::warn;
use thiserror::Error;

use crate::graph::SocialGraph;

/// A line that matches neither record kind.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed input line: {line:?}")]
pub struct MalformedLine {
    pub line: String,
}

/// A parsed dataset line.
#[derive(Debug, PartialEq, Eq)]
pub enum Record {
    User(String),
    Friend(String, String),
}

/// Parse a single dataset line. `Ok(None)` means a blank line.
pub fn parse_line(line: &str) -> Result<Option<Record>, MalformedLine> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Ok(None);
    };
    match (keyword, parts.next(), parts.next(), parts.next()) {
        ("USER", Some(id), None, None) => Ok(Some(Record::User(id.to_string()))),
        ("FRIEND", Some(u1), Some(u2), None) => {
            Ok(Some(Record::Friend(u1.to_string(), u2.to_string())))
        }
        _ => Err(MalformedLine {
            line: line.to_string(),
        }),
    }
}

/// Build a [`SocialGraph`] from the dataset file at `path`.
pub fn load_dataset(path: impl AsRef<Path>) -> io::Result<SocialGraph> {
    let reader = BufReader::new(File::open(path)?);
    let mut graph = SocialGraph::new();

    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(Record::User(id))) => graph.add_user(&id),
            Ok(Some(Record::Friend(u1, u2))) => graph.add_friendship(&u1, &u2),
            Ok(None) => {}
            Err(err) => warn!("skipping line: {err}"),
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_user_lines() {
        assert_eq!(
            parse_line("USER 101"),
            Ok(Some(Record::User("101".to_string())))
        );
    }

    #[test]
    fn parses_friend_lines() {
        assert_eq!(
            parse_line("FRIEND 101 102"),
            Ok(Some(Record::Friend("101".to_string(), "102".to_string())))
        );
    }

    #[test]
    fn blank_lines_parse_to_nothing() {
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("   \t "), Ok(None));
    }

    #[test]
    fn rejects_unknown_keywords_and_wrong_arity() {
        assert!(parse_line("FOLLOW 101 102").is_err());
        assert!(parse_line("USER").is_err());
        assert!(parse_line("USER 101 extra").is_err());
        assert!(parse_line("FRIEND 101").is_err());
        assert!(parse_line("FRIEND 101 102 103").is_err());
    }

    #[test]
    fn loads_a_dataset_and_skips_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("network.txt");
        std::fs::write(
            &path,
            "USER 101\n\
             USER 102\n\
             USER 103\n\
             \n\
             FRIEND 101 102\n\
             this line is noise\n\
             FRIEND 102 103\n",
        )
        .unwrap();

        let graph = load_dataset(&path).unwrap();

        assert_eq!(graph.user_count(), 3);
        assert_eq!(graph.friendship_count(), 2);
        assert_eq!(graph.neighbors("102"), vec!["101", "103"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dataset(dir.path().join("absent.txt")).is_err());
    }
}
