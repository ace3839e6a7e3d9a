//! Line diff for restoration failures.

use std::fmt;

/// The first difference between an original text and its restoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineDiff {
    Identical,
    /// Line `line` (1-based) differs.
    Changed {
        line: usize,
        expected: String,
        actual: String,
    },
    /// The restoration has this many lines beyond the original's end.
    ExtraLines(usize),
    /// The restoration stops this many lines short.
    MissingLines(usize),
}

impl LineDiff {
    pub fn is_identical(&self) -> bool {
        matches!(self, LineDiff::Identical)
    }
}

/// Compare two texts line by line. Line terminators take part in the comparison.
pub fn diff_lines(expected: &str, actual: &str) -> LineDiff {
    let mut expected_lines = expected.split_inclusive('\n');
    let mut actual_lines = actual.split_inclusive('\n');
    let mut line = 0;
    loop {
        line += 1;
        match (expected_lines.next(), actual_lines.next()) {
            (None, None) => return LineDiff::Identical,
            (Some(_), None) => return LineDiff::MissingLines(1 + expected_lines.count()),
            (None, Some(_)) => return LineDiff::ExtraLines(1 + actual_lines.count()),
            (Some(e), Some(a)) if e != a => {
                return LineDiff::Changed {
                    line,
                    expected: e.to_string(),
                    actual: a.to_string(),
                }
            }
            _ => {}
        }
    }
}

impl fmt::Display for LineDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineDiff::Identical => write!(f, "no differences"),
            LineDiff::Changed {
                line,
                expected,
                actual,
            } => {
                writeln!(f, "first difference at line {}:", line)?;
                writeln!(f, "  original: {:?}", expected)?;
                write!(f, "  restored: {:?}", actual)
            }
            LineDiff::ExtraLines(n) => write!(f, "restored text has {} extra line(s)", n),
            LineDiff::MissingLines(n) => write!(f, "restored text is missing {} line(s)", n),
        }
    }
}
