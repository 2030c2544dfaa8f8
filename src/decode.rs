use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

use crate::compare::{ComparisonWarning, WarningCode};
use crate::error::Side;

pub(crate) fn non_utf8_warning(
    encoding: &'static Encoding,
    side: Option<Side>,
) -> ComparisonWarning {
    ComparisonWarning {
        code: WarningCode::NonUtf8Input,
        message: format!("input is not UTF-8, decoded as {}", encoding.name()),
        side,
    }
}

/// Decode raw output bytes, reporting the encoding that was used.
///
/// A byte order mark selects the encoding when present (the BOM itself is
/// dropped). Otherwise the bytes are read as UTF-8, falling back to
/// Windows-1252, which accepts any byte sequence.
pub(crate) fn decode(data: &[u8]) -> (String, &'static Encoding) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(data) {
        let (text, _) = encoding.decode_without_bom_handling(&data[bom_len..]);
        return (text.into_owned(), encoding);
    }

    match std::str::from_utf8(data) {
        Ok(text) => (text.to_string(), UTF_8),
        Err(_) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(data);
            (text.into_owned(), WINDOWS_1252)
        }
    }
}

/// Decode raw output bytes into text.
///
/// Anything other than UTF-8 comes back with a `NonUtf8Input` warning.
pub fn decode_text(data: &[u8]) -> (String, Option<ComparisonWarning>) {
    let (text, encoding) = decode(data);
    let warning = (encoding != UTF_8).then(|| non_utf8_warning(encoding, None));
    (text, warning)
}
