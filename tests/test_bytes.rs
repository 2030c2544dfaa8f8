mod common;

use common::fixture_bytes;
use simcmp::{CompareError, CompareOptions, Side, WarningCode, compare_bytes};

fn opts() -> CompareOptions {
    CompareOptions::default()
}

#[test]
fn test_bytes_utf8_logs_match_without_warnings() {
    let rtl = fixture_bytes("counter_rtl.log");
    let netlist = fixture_bytes("counter_netlist.log");
    let result = compare_bytes(Some(rtl.as_slice()), Some(netlist.as_slice()), &opts()).unwrap();
    assert!(result.is_equal);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_bytes_absent_sides() {
    let result = compare_bytes(None, None, &opts()).unwrap();
    assert_eq!(result.into_parts(), (true, String::new()));
}

#[test]
fn test_bytes_non_utf8_decoded_with_warning() {
    let netlist = fixture_bytes("counter_netlist_latin1.log");
    let expected = "PASS: r\u{e9}sultat 4".as_bytes();
    let result = compare_bytes(Some(expected), Some(netlist.as_slice()), &opts()).unwrap();
    assert!(result.is_equal, "unexpected diff:\n{}", result.diff);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, WarningCode::NonUtf8Input);
    assert_eq!(result.warnings[0].side, Some(Side::Actual));
}

#[test]
fn test_bytes_warnings_kept_on_mismatch() {
    let netlist = fixture_bytes("counter_netlist_latin1.log");
    let result =
        compare_bytes(Some(netlist.as_slice()), Some(&b"PASS: other"[..]), &opts()).unwrap();
    assert!(!result.is_equal);
    assert!(result.diff.contains("-PASS: r\u{e9}sultat 4"));
    assert!(result.diff.contains("+PASS: other"));
    assert_eq!(result.warnings[0].side, Some(Side::Expected));
}

#[test]
fn test_bytes_utf16_bom_decoded() {
    let mut expected: Vec<u8> = vec![0xFF, 0xFE];
    for unit in "a\nb".encode_utf16() {
        expected.extend_from_slice(&unit.to_le_bytes());
    }
    let result = compare_bytes(Some(expected.as_slice()), Some(&b"a\nb\n"[..]), &opts()).unwrap();
    assert!(result.is_equal);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].message.contains("UTF-16LE"));
}

#[test]
fn test_bytes_strict_rejects_non_utf8() {
    let netlist = fixture_bytes("counter_netlist_latin1.log");
    let options = CompareOptions {
        strict: true,
        ..Default::default()
    };
    let err =
        compare_bytes(Some(&b"PASS"[..]), Some(netlist.as_slice()), &options).unwrap_err();
    match err {
        CompareError::InvalidEncoding { side, encoding } => {
            assert_eq!(side, Side::Actual);
            assert_eq!(encoding, "windows-1252");
        }
    }
}

#[test]
fn test_bytes_strict_error_message() {
    let options = CompareOptions {
        strict: true,
        ..Default::default()
    };
    let err = compare_bytes(Some(&b"caf\xe9"[..]), None, &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected output is not UTF-8 (decoded as windows-1252)"
    );
}

#[test]
fn test_bytes_strict_accepts_utf8() {
    let options = CompareOptions {
        strict: true,
        ..Default::default()
    };
    let rtl = fixture_bytes("counter_rtl.log");
    let result = compare_bytes(Some(rtl.as_slice()), Some(rtl.as_slice()), &options).unwrap();
    assert!(result.is_equal);
}
