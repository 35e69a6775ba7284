//! Tests for query parameter validation

use super::*;
use crate::error::Error;
use test_case::test_case;

// ============================================================================
// validate_number Tests
// ============================================================================

#[test]
fn test_absent_value_is_none() {
    assert_eq!(validate_number(None).unwrap(), None);
}

#[test_case("0", 0 ; "zero")]
#[test_case("5", 5 ; "small")]
#[test_case("+7", 7 ; "explicit plus")]
#[test_case("-0", 0 ; "negative zero")]
#[test_case("5.0", 5 ; "integral decimal")]
#[test_case("1e2", 100 ; "exponent")]
#[test_case("1000000", 1_000_000 ; "large")]
#[test_case(" 5", 5 ; "leading whitespace")]
#[test_case("5\n", 5 ; "trailing newline")]
#[test_case("0x10", 16 ; "hex")]
#[test_case("0B101", 5 ; "binary")]
#[test_case("0o17", 15 ; "octal")]
#[test_case("18446744073709551615", u64::MAX ; "u64 max")]
#[test_case("100000000000000000000", u64::MAX ; "beyond u64 saturates")]
#[test_case("1e300", u64::MAX ; "huge exponent saturates")]
fn test_accepts_integers(raw: &str, expected: u64) {
    assert_eq!(validate_number(Some(raw)).unwrap(), Some(expected));
}

#[test_case("f" ; "letter")]
#[test_case("" ; "empty")]
#[test_case("   " ; "whitespace only")]
#[test_case("true" ; "boolean")]
#[test_case("2.5" ; "fraction")]
#[test_case("NaN" ; "nan")]
#[test_case("Infinity" ; "infinity")]
#[test_case("0x" ; "bare hex prefix")]
#[test_case("0xfg" ; "bad hex digit")]
#[test_case("0x+5" ; "signed hex digits")]
#[test_case("-0x10" ; "negative hex")]
#[test_case("5 5" ; "inner whitespace")]
fn test_rejects_non_integers(raw: &str) {
    let err = validate_number(Some(raw)).unwrap_err();
    assert!(
        matches!(err, Error::InvalidNumber { .. }),
        "expected InvalidNumber for {raw:?}, got {err:?}"
    );
}

#[test_case("-1" ; "minus one")]
#[test_case("-25" ; "minus twenty five")]
#[test_case("-3.0" ; "integral negative decimal")]
fn test_rejects_negative(raw: &str) {
    let err = validate_number(Some(raw)).unwrap_err();
    assert!(matches!(err, Error::NegativeNumber { .. }));
}

#[test]
fn test_failures_map_to_bad_request() {
    let invalid = validate_number(Some("f")).unwrap_err();
    let negative = validate_number(Some("-1")).unwrap_err();
    assert_eq!(invalid.status_code(), negative.status_code());
    assert_eq!(invalid.status_code().as_u16(), 400);
}

// ============================================================================
// CollectionQuery Tests
// ============================================================================

fn raw(size: Option<&str>, limit: Option<&str>, offset: Option<&str>) -> RawCollectionQuery {
    RawCollectionQuery {
        size: size.map(String::from),
        limit: limit.map(String::from),
        offset: offset.map(String::from),
        page: None,
    }
}

#[test]
fn test_collection_query_defaults() {
    let query = CollectionQuery::from_raw(&RawCollectionQuery::default()).unwrap();
    assert_eq!(query.size_or(DEFAULT_SIZE), 25);
    assert_eq!(query.size_or(5), 5);
    assert_eq!(query.limit(), DEFAULT_LIMIT);
    assert_eq!(query.offset(), DEFAULT_OFFSET);
    assert_eq!(query.page(), DEFAULT_PAGE);
}

#[test]
fn test_collection_query_explicit_zero_is_kept() {
    let query = CollectionQuery::from_raw(&raw(Some("0"), Some("0"), Some("0"))).unwrap();
    assert_eq!(query.size_or(25), 0);
    assert_eq!(query.limit(), 0);
    assert_eq!(query.offset(), 0);
}

#[test]
fn test_collection_query_rejects_any_bad_field() {
    assert!(CollectionQuery::from_raw(&raw(Some("f"), None, None)).is_err());
    assert!(CollectionQuery::from_raw(&raw(None, Some("-1"), None)).is_err());
    assert!(CollectionQuery::from_raw(&raw(None, None, Some("1.5"))).is_err());

    let bad_page = RawCollectionQuery {
        page: Some("f".to_string()),
        ..Default::default()
    };
    assert!(CollectionQuery::from_raw(&bad_page).is_err());
}

#[test]
fn test_collection_query_size_is_uncapped() {
    let query = CollectionQuery::from_raw(&raw(Some("1000000"), None, None)).unwrap();
    assert_eq!(query.size_or(DEFAULT_SIZE), 1_000_000);
}

#[test]
fn test_capped_size() {
    let query = CollectionQuery::from_raw(&raw(Some("100"), None, None)).unwrap();
    assert_eq!(query.capped_size_or(5, 100).unwrap(), 100);

    let query = CollectionQuery::from_raw(&raw(Some("101"), None, None)).unwrap();
    let err = query.capped_size_or(5, 100).unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { .. }));

    let query = CollectionQuery::default();
    assert_eq!(query.capped_size_or(5, 100).unwrap(), 5);
}
