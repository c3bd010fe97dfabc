//! Strict decoders over the raw price-list tree.
//!
//! The catalog API returns untyped JSON; these walkers impose the schema
//! by assertion, failing on the first unrecognized key or unexpected
//! value shape anywhere in the tree. There is no partial-success mode:
//! one bad entry aborts the whole batch.

mod price_dimension;
mod product;
mod terms;

use serde_json::{Map, Value};

use crate::error::{json_type, DecodeError};
use crate::types::PricingDocument;

/// Decodes one batch of raw price-list entries into typed documents.
///
/// Each entry must be a mapping whose keys are exactly drawn from
/// {publicationDate, version, serviceCode, product, terms}. The first
/// decode error encountered is returned and no documents are produced.
pub fn decode_price_list(price_list: &[Value]) -> Result<Vec<PricingDocument>, DecodeError> {
    let mut documents = Vec::with_capacity(price_list.len());

    for entry in price_list {
        let fields = as_object(entry, "price list entry")?;
        let mut doc = PricingDocument::default();

        for (key, value) in fields {
            match key.as_str() {
                "publicationDate" => doc.publication_date = as_str(value, key)?.to_owned(),
                "version" => doc.version = as_str(value, key)?.to_owned(),
                "serviceCode" => doc.service_code = as_str(value, key)?.to_owned(),
                "product" => {
                    let product = product::decode_product(as_object(value, key)?)?;
                    doc.products.push(product);
                }
                "terms" => terms::decode_terms(&mut doc, as_object(value, key)?)?,
                other => {
                    return Err(DecodeError::UnexpectedPriceListItem(other.to_owned()));
                }
            }
        }

        documents.push(doc);
    }

    Ok(documents)
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    field: &str,
) -> Result<&'a Map<String, Value>, DecodeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(DecodeError::UnexpectedType {
            field: field.to_owned(),
            expected: "object",
            found: json_type(other),
        }),
    }
}

pub(crate) fn as_str<'a>(value: &'a Value, field: &str) -> Result<&'a str, DecodeError> {
    match value {
        Value::String(text) => Ok(text),
        other => Err(DecodeError::UnexpectedType {
            field: field.to_owned(),
            expected: "string",
            found: json_type(other),
        }),
    }
}
