use serde_json::Value;
use std::num::ParseFloatError;
use thiserror::Error;

/// Failure raised while walking a raw price-list tree.
///
/// Every variant is fatal to the batch: the first error encountered
/// anywhere in the walk aborts the whole decode call.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unexpected price list item: `{0}`")]
    UnexpectedPriceListItem(String),

    #[error("unexpected {context} field: `{field}`")]
    UnexpectedField {
        context: &'static str,
        field: String,
    },

    #[error("unexpected type for `{field}`: expected {expected}, got {found}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid price for `{currency}`: `{value}`")]
    InvalidPrice {
        currency: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unexpected term attributes for OnDemand offer `{offer_key}`")]
    NonEmptyTermAttributes { offer_key: String },
}

/// Name of a JSON value's runtime shape, used in type-mismatch errors.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
