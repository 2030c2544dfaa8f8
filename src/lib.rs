pub mod compare;
pub mod decode;
pub mod error;
pub mod normalize;

pub use compare::{
    CompareOptions, Comparison, ComparisonWarning, WarningCode, compare_outputs,
    compare_outputs_with,
};
pub use decode::decode_text;
pub use error::{CompareError, Side};
pub use normalize::normalize_output;

/// Compare raw expected and actual output bytes.
///
/// Each present side is decoded with [`decode_text`] before comparison.
/// Decoding warnings are tagged with their side and attached to the result,
/// or returned as `InvalidEncoding` when `options.strict` is set.
pub fn compare_bytes(
    expected: Option<&[u8]>,
    actual: Option<&[u8]>,
    options: &CompareOptions,
) -> Result<Comparison, CompareError> {
    let mut warnings = Vec::new();
    let expected = decode_side(expected, Side::Expected, options, &mut warnings)?;
    let actual = decode_side(actual, Side::Actual, options, &mut warnings)?;

    let mut comparison = compare_outputs_with(expected.as_deref(), actual.as_deref(), options);
    comparison.warnings = warnings;
    Ok(comparison)
}

fn decode_side(
    data: Option<&[u8]>,
    side: Side,
    options: &CompareOptions,
    warnings: &mut Vec<ComparisonWarning>,
) -> Result<Option<String>, CompareError> {
    let Some(data) = data else {
        return Ok(None);
    };

    let (text, encoding) = decode::decode(data);
    if encoding != encoding_rs::UTF_8 {
        tracing::warn!(%side, encoding = encoding.name(), "output is not UTF-8");
        if options.strict {
            return Err(CompareError::InvalidEncoding {
                side,
                encoding: encoding.name(),
            });
        }
        warnings.push(decode::non_utf8_warning(encoding, Some(side)));
    }

    Ok(Some(text))
}
