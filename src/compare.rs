use similar::{Algorithm, ChangeTag, TextDiff};

use crate::error::Side;
use crate::normalize::normalize_output;

/// Categories for recoverable issues found while preparing a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    NonUtf8Input,
}

/// A recoverable issue attached to a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonWarning {
    pub code: WarningCode,
    pub message: String,
    /// The output the issue was found in, when known.
    pub side: Option<Side>,
}

/// Options controlling comparison and diff rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// File label for the expected side (`--- <label>`).
    pub expected_label: String,
    /// File label for the actual side (`+++ <label>`).
    pub actual_label: String,
    /// Number of unchanged lines shown around each change.
    pub context_radius: usize,
    /// If true, return an error on undecodable input instead of a warning.
    pub strict: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            expected_label: "rtl".to_string(),
            actual_label: "netlist".to_string(),
            context_radius: 3,
            strict: false,
        }
    }
}

impl CompareOptions {
    pub fn with_labels(self, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected_label: expected.into(),
            actual_label: actual.into(),
            ..self
        }
    }

    pub fn with_context_radius(self, context_radius: usize) -> Self {
        Self {
            context_radius,
            ..self
        }
    }
}

/// The outcome of comparing two outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Comparison {
    /// True when both outputs normalize to the same line sequence.
    pub is_equal: bool,
    /// Unified diff of the normalized lines. Empty when `is_equal`.
    pub diff: String,
    /// Recoverable issues encountered while decoding the inputs.
    pub warnings: Vec<ComparisonWarning>,
}

impl Comparison {
    fn equal() -> Self {
        Self {
            is_equal: true,
            ..Default::default()
        }
    }

    /// Split into the `(is_equal, diff)` pair harnesses usually consume.
    pub fn into_parts(self) -> (bool, String) {
        (self.is_equal, self.diff)
    }
}

impl From<Comparison> for (bool, String) {
    fn from(comparison: Comparison) -> Self {
        comparison.into_parts()
    }
}

/// Compare expected and actual output using the default options.
///
/// Whitespace around lines and blank lines are ignored. See
/// [`compare_outputs_with`] for the diff format.
pub fn compare_outputs(expected: Option<&str>, actual: Option<&str>) -> Comparison {
    compare_outputs_with(expected, actual, &CompareOptions::default())
}

/// Compare expected and actual output.
///
/// Both sides are normalized with [`normalize_output`]. If the resulting line
/// sequences differ, `diff` holds a unified diff of them: file headers, then
/// `@@ -start,len +start,len @@` hunks with ` `, `-` and `+` prefixed lines,
/// joined with `\n` and without a trailing newline.
///
/// Hunks come from a Myers diff. On highly repetitive input the exact hunk
/// contents can differ from what other diff tools produce.
pub fn compare_outputs_with(
    expected: Option<&str>,
    actual: Option<&str>,
    options: &CompareOptions,
) -> Comparison {
    let expected_lines = normalize_output(expected);
    let actual_lines = normalize_output(actual);

    if expected_lines == actual_lines {
        tracing::debug!(lines = expected_lines.len(), "outputs match");
        return Comparison::equal();
    }

    let diff = unified_diff(&expected_lines, &actual_lines, options);
    tracing::debug!(
        expected_lines = expected_lines.len(),
        actual_lines = actual_lines.len(),
        "outputs differ"
    );

    Comparison {
        is_equal: false,
        diff,
        warnings: Vec::new(),
    }
}

/// Render a unified diff between two line sequences.
///
/// Returns an empty string when the sequences are equal.
fn unified_diff(expected: &[&str], actual: &[&str], options: &CompareOptions) -> String {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_slices(expected, actual);

    let mut udiff = diff.unified_diff();
    // Any radius past the longest side already shows everything.
    udiff.context_radius(options.context_radius.min(expected.len().max(actual.len())));

    let mut out: Vec<String> = Vec::new();
    for hunk in udiff.iter_hunks() {
        if out.is_empty() {
            out.push(format!("--- {}", options.expected_label));
            out.push(format!("+++ {}", options.actual_label));
        }
        out.push(hunk.header().to_string());
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Equal => ' ',
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
            };
            out.push(format!("{sign}{}", change.value()));
        }
    }

    out.join("\n")
}
