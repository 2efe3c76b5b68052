//! Domain failure kinds the backend reports for a vend.
//!
//! The backend marks these on an error response body, either with a
//! machine-readable `code` or with one of its canonical `error` messages.

use std::fmt;

use serde_json::Value;

/// A backend-reported vend failure, distinct from a plain HTTP error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DomainErrorKind {
    ItemNotFound,
    ItemOutOfStock,
    InsufficientBalance,
    UnableToReturnBalance,
}

const ALL: [DomainErrorKind; 4] = [
    DomainErrorKind::ItemNotFound,
    DomainErrorKind::ItemOutOfStock,
    DomainErrorKind::InsufficientBalance,
    DomainErrorKind::UnableToReturnBalance,
];

impl DomainErrorKind {
    /// Machine-readable code, e.g. `ITEM_NOT_FOUND`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::ItemNotFound => "ITEM_NOT_FOUND",
            Self::ItemOutOfStock => "ITEM_OUT_OF_STOCK",
            Self::InsufficientBalance => "INSUFFICIENT_BALANCE",
            Self::UnableToReturnBalance => "UNABLE_TO_RETURN_BALANCE",
        }
    }

    /// Canonical backend message, e.g. `Item not found`.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::ItemNotFound => "Item not found",
            Self::ItemOutOfStock => "Item out of stock",
            Self::InsufficientBalance => "Insufficient balance",
            Self::UnableToReturnBalance => "Unable to return balance",
        }
    }

    /// Item missing or out of stock.
    #[must_use]
    pub fn is_not_found_class(self) -> bool {
        matches!(self, Self::ItemNotFound | Self::ItemOutOfStock)
    }

    /// Tendered amount or change cannot be settled.
    #[must_use]
    pub fn is_balance_class(self) -> bool {
        matches!(self, Self::InsufficientBalance | Self::UnableToReturnBalance)
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        ALL.into_iter().find(|k| k.code() == code)
    }

    #[must_use]
    pub fn from_message(message: &str) -> Option<Self> {
        let message = message.trim();
        ALL.into_iter().find(|k| k.message().eq_ignore_ascii_case(message))
    }

    /// Classify a backend error body.
    ///
    /// A recognised `code` wins over the `error` message. Each field is read
    /// on its own; a non-string value in one does not hide the other. Bodies
    /// that are not JSON objects, or carry neither marker, are not domain
    /// errors.
    #[must_use]
    pub fn from_payload(body: &[u8]) -> Option<Self> {
        let payload: Value = serde_json::from_slice(body).ok()?;
        str_field(&payload, "code")
            .and_then(Self::from_code)
            .or_else(|| str_field(&payload, "error").and_then(Self::from_message))
    }
}

fn str_field<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    payload.get(name).and_then(Value::as_str)
}

impl fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_with_code_classifies() {
        let body = br#"{"code":"ITEM_OUT_OF_STOCK","error":"sold out"}"#;
        assert_eq!(DomainErrorKind::from_payload(body), Some(DomainErrorKind::ItemOutOfStock));
    }

    #[test]
    fn payload_with_canonical_message_classifies() {
        let body = br#"{"error": "Insufficient balance"}"#;
        assert_eq!(
            DomainErrorKind::from_payload(body),
            Some(DomainErrorKind::InsufficientBalance)
        );
        let body = br#"{"error": "item NOT found"}"#;
        assert_eq!(DomainErrorKind::from_payload(body), Some(DomainErrorKind::ItemNotFound));
    }

    #[test]
    fn unknown_code_falls_back_to_message() {
        let body = br#"{"code":"E42","error":"Unable to return balance"}"#;
        assert_eq!(
            DomainErrorKind::from_payload(body),
            Some(DomainErrorKind::UnableToReturnBalance)
        );
    }

    #[test]
    fn non_string_code_does_not_hide_message() {
        let body = br#"{"code": 404, "error": "Item not found"}"#;
        assert_eq!(DomainErrorKind::from_payload(body), Some(DomainErrorKind::ItemNotFound));
    }

    #[test]
    fn non_string_error_does_not_hide_code() {
        let body = br#"{"code": "INSUFFICIENT_BALANCE", "error": {"detail": "short by 0.5"}}"#;
        assert_eq!(
            DomainErrorKind::from_payload(body),
            Some(DomainErrorKind::InsufficientBalance)
        );
    }

    #[test]
    fn unrelated_payloads_are_not_domain_errors() {
        assert_eq!(DomainErrorKind::from_payload(br#"{"error":"Slot jammed"}"#), None);
        assert_eq!(DomainErrorKind::from_payload(b"Internal Server Error"), None);
        assert_eq!(DomainErrorKind::from_payload(b"[]"), None);
        assert_eq!(DomainErrorKind::from_payload(b""), None);
    }

    #[test]
    fn classes_partition_the_kinds() {
        for kind in ALL {
            assert_ne!(
                kind.is_not_found_class(),
                kind.is_balance_class(),
                "{kind:?} must be in exactly one class"
            );
        }
    }
}
