//! Tests for character encoding selection

use super::*;
use ledgerline_core::NotificationQueue;
use pretty_assertions::assert_eq;

fn selector() -> (EncodingSelector, Arc<NotificationQueue>) {
    let queue = Arc::new(NotificationQueue::new());
    (EncodingSelector::new(queue.clone()), queue)
}

#[test]
fn test_defaults_to_utf8() {
    let (encoding, _queue) = selector();
    assert_eq!(encoding.current_encoding(), StatementEncoding::Utf8);
}

#[test]
fn test_round_trip_every_encoding() {
    let (mut encoding, queue) = selector();

    for candidate in StatementEncoding::all() {
        encoding.set_encoding(candidate.id()).unwrap();
        assert_eq!(encoding.current_encoding(), *candidate);
    }
    assert!(queue.is_empty());
}

#[test]
fn test_accepts_canonical_name_in_any_case() {
    let (mut encoding, _queue) = selector();

    assert_eq!(encoding.set_encoding("UTF-16"), Ok(StatementEncoding::Utf16));
    assert_eq!(encoding.set_encoding("utf-8"), Ok(StatementEncoding::Utf8));
    assert_eq!(encoding.set_encoding("UTF16"), Ok(StatementEncoding::Utf16));
}

#[test]
fn test_invalid_value_keeps_prior_choice() {
    let (mut encoding, queue) = selector();
    encoding.set_encoding("utf16").unwrap();

    let err = encoding.set_encoding("latin1").unwrap_err();

    assert_eq!(
        err,
        ImportError::InvalidEncoding {
            value: "latin1".to_string()
        }
    );
    assert_eq!(encoding.current_encoding(), StatementEncoding::Utf16);
    assert_eq!(queue.drain().len(), 1);
}

#[test]
fn test_configured_domain_limits_choices() {
    let queue = Arc::new(NotificationQueue::new());
    let mut encoding = EncodingSelector::with_domain(
        vec![StatementEncoding::Utf16, StatementEncoding::Utf16],
        queue.clone(),
    );

    assert_eq!(encoding.domain(), &[StatementEncoding::Utf16]);
    assert_eq!(encoding.current_encoding(), StatementEncoding::Utf16);
    assert!(encoding.select(StatementEncoding::Utf8).is_err());
    assert!(encoding.set_encoding("utf8").is_err());
    assert_eq!(encoding.current_encoding(), StatementEncoding::Utf16);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_empty_domain_falls_back_to_all() {
    let encoding = EncodingSelector::with_domain(Vec::new(), Arc::new(NotificationQueue::new()));
    assert_eq!(encoding.domain(), StatementEncoding::all());
}

#[test]
fn test_options_flag_current_choice() {
    let (mut encoding, _queue) = selector();
    encoding.select(StatementEncoding::Utf16).unwrap();

    assert_eq!(
        encoding.options(),
        vec![
            EncodingOption {
                encoding: StatementEncoding::Utf8,
                label: "UTF-8 (Unicode)",
                selected: false,
            },
            EncodingOption {
                encoding: StatementEncoding::Utf16,
                label: "UTF-16",
                selected: true,
            },
        ]
    );
}

#[test]
fn test_serde_uses_identifiers() {
    assert_eq!(
        serde_json::to_string(&StatementEncoding::Utf16).unwrap(),
        "\"utf16\""
    );
    let parsed: StatementEncoding = serde_json::from_str("\"utf8\"").unwrap();
    assert_eq!(parsed, StatementEncoding::Utf8);
}
