//! The interactive read-evaluate-print loop.
//!
//! `run_session` is generic over its input and output so the binary can hand
//! it locked stdin/stdout while tests use in-memory buffers. Diagnostics go
//! through `log` (stderr); only the transcript is written to `output`.

use std::io::{BufRead, Write};

use log::{debug, info, trace};

use crate::error::Result;
use crate::gc::{first_invalid, gc_content};

pub const BANNER: [&str; 3] = [
    "GC Content Analyzer",
    "-------------------",
    "Enter a DNA sequence (or 'exit' to quit):",
];
pub const PROMPT: &str = "> ";
pub const INVALID_MSG: &str = "Invalid DNA sequence. Please enter only A, C, G, or T.";
pub const GOODBYE_MSG: &str = "Exiting the program. Goodbye!";

/// Normalized form of the exit sentinel.
const EXIT_SENTINEL: &str = "EXIT";

/// Whitespace stripped from both ends of a line: Unicode `White_Space` plus
/// the ASCII separators U+001C..=U+001F.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// What a single input line asks the loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The line was the exit sentinel.
    Exit,
    /// A normalized (trimmed, uppercase) sequence over {A, C, G, T}.
    Sequence(String),
    /// First character outside the alphabet and its position in the
    /// normalized line.
    Invalid { base: char, position: usize },
}

impl Command {
    /// Classify a raw input line: trim surrounding whitespace, uppercase, then
    /// check for the sentinel before validating the alphabet.
    pub fn parse(line: &str) -> Self {
        let normalized = line.trim_matches(is_strippable).to_uppercase();
        if normalized == EXIT_SENTINEL {
            return Command::Exit;
        }
        match first_invalid(&normalized) {
            Some((position, base)) => Command::Invalid { base, position },
            None => Command::Sequence(normalized),
        }
    }
}

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed the exit sentinel.
    Exit,
    /// Input ran out before the sentinel was seen.
    EndOfInput,
}

/// Counters collected over one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that were analyzed and reported.
    pub analyzed: usize,
    /// Lines rejected for containing a character outside the alphabet.
    pub rejected: usize,
    pub end: SessionEnd,
}

/// Format the response line for a validated sequence.
pub fn report_line(seq: &str) -> String {
    format!("GC Content: {:.2}%", gc_content(seq))
}

/// Run the interactive loop until the sentinel or end of input.
///
/// Writes the banner, then for each line: prompt, read, classify, respond.
/// End of input is treated like the sentinel, including the goodbye line.
///
/// # Errors
/// Returns `Error::Io` if reading `input` or writing `output` fails. Invalid
/// sequences are never errors at this level; they are reported and the loop
/// continues.
pub fn run_session<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<SessionSummary> {
    for line in BANNER {
        writeln!(output, "{}", line)?;
    }

    let mut analyzed = 0usize;
    let mut rejected = 0usize;
    let mut bytes = Vec::new();

    let end = loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        bytes.clear();
        if input.read_until(b'\n', &mut bytes)? == 0 {
            debug!("end of input reached without exit command");
            // keep the transcript on its own line after the dangling prompt
            writeln!(output)?;
            break SessionEnd::EndOfInput;
        }
        // undecodable bytes become U+FFFD and fail the alphabet check
        let line = String::from_utf8_lossy(&bytes);
        trace!("read {:?}", line);

        match Command::parse(&line) {
            Command::Exit => break SessionEnd::Exit,
            Command::Invalid { base, position } => {
                debug!("rejected input: base {:?} at position {}", base, position);
                rejected += 1;
                writeln!(output, "{}", INVALID_MSG)?;
            }
            Command::Sequence(seq) => {
                debug!("analyzing sequence of length {}", seq.len());
                analyzed += 1;
                writeln!(output, "{}", report_line(&seq))?;
            }
        }
    };

    writeln!(output, "{}", GOODBYE_MSG)?;
    output.flush()?;

    let summary = SessionSummary { analyzed, rejected, end };
    info!(
        "session finished ({:?}): {} analyzed, {} rejected",
        summary.end, summary.analyzed, summary.rejected
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(input: &str) -> (SessionSummary, String) {
        let mut out = Vec::new();
        let summary = run_session(Cursor::new(input.as_bytes()), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_exit_any_case() {
        assert_eq!(Command::parse("exit"), Command::Exit);
        assert_eq!(Command::parse("  ExIt \n"), Command::Exit);
        assert_eq!(Command::parse("EXIT"), Command::Exit);
    }

    #[test]
    fn test_parse_sequence_normalizes() {
        assert_eq!(
            Command::parse("  acgT\n"),
            Command::Sequence("ACGT".to_string())
        );
    }

    #[test]
    fn test_parse_empty_line_is_empty_sequence() {
        assert_eq!(Command::parse("\n"), Command::Sequence(String::new()));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            Command::parse("acgx"),
            Command::Invalid { base: 'X', position: 3 }
        );
        assert!(matches!(Command::parse("exit now"), Command::Invalid { .. }));
    }

    #[test]
    fn test_parse_strips_ascii_separators() {
        assert_eq!(
            Command::parse("ACGT\u{1f}\n"),
            Command::Sequence("ACGT".to_string())
        );
        assert_eq!(Command::parse("\u{1c}exit\u{85}"), Command::Exit);
        assert!(matches!(Command::parse("AC\u{1f}GT"), Command::Invalid { .. }));
    }

    #[test]
    fn test_report_line() {
        assert_eq!(report_line("GCGC"), "GC Content: 100.00%");
        assert_eq!(report_line("ATAT"), "GC Content: 0.00%");
        assert_eq!(report_line("AAG"), "GC Content: 33.33%");
    }

    #[test]
    fn test_banner_then_prompt() {
        let (_, out) = session("exit\n");
        assert!(out.starts_with(
            "GC Content Analyzer\n-------------------\nEnter a DNA sequence (or 'exit' to quit):\n> "
        ));
    }

    #[test]
    fn test_counts() {
        let (summary, _) = session("ACGT\nxyz\nGG\nACGTN\nexit\n");
        assert_eq!(summary.analyzed, 2);
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.end, SessionEnd::Exit);
    }

    #[test]
    fn test_end_of_input_says_goodbye() {
        let (summary, out) = session("ACGT");
        assert_eq!(summary.end, SessionEnd::EndOfInput);
        assert!(out.ends_with("> \nExiting the program. Goodbye!\n"));
    }

    #[test]
    fn test_non_utf8_line_is_rejected_not_fatal() {
        let mut out = Vec::new();
        let summary = run_session(&b"AC\xffGT\nACGT\nexit\n"[..], &mut out).unwrap();
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.analyzed, 1);
        assert_eq!(summary.end, SessionEnd::Exit);
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with(
            "> Invalid DNA sequence. Please enter only A, C, G, or T.\n\
             > GC Content: 50.00%\n\
             > Exiting the program. Goodbye!\n"
        ));
    }

    #[test]
    fn test_stops_reading_after_exit() {
        let (summary, out) = session("exit\nGGGG\n");
        assert_eq!(summary.analyzed, 0);
        assert!(!out.contains("GC Content: 100.00%"));
    }
}
