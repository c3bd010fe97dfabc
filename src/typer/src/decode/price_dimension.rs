use serde_json::{Map, Value};

use crate::decode::{as_object, as_str};
use crate::error::{json_type, DecodeError};
use crate::types::{PriceDimension, PriceDimensionItem};

/// Decodes a `priceDimensions` mapping into one keyed dimension per
/// rate code, in input traversal order. The source mapping is unordered
/// by nature, so callers must not rely on cross-run ordering.
pub(crate) fn decode_price_dimensions(value: &Value) -> Result<Vec<PriceDimension>, DecodeError> {
    let entries = as_object(value, "priceDimensions")?;
    let mut dimensions = Vec::with_capacity(entries.len());

    for (rate_code, item) in entries {
        let fields = as_object(item, rate_code)?;
        let decoded = decode_item(fields)?;

        let mut dimension = PriceDimension::new();
        dimension.insert(rate_code.clone(), decoded);
        dimensions.push(dimension);
    }

    Ok(dimensions)
}

fn decode_item(fields: &Map<String, Value>) -> Result<PriceDimensionItem, DecodeError> {
    let mut item = PriceDimensionItem::default();

    for (key, value) in fields {
        match key.as_str() {
            "unit" => item.unit = as_str(value, key)?.to_owned(),
            "beginRange" => item.begin_range = as_str(value, key)?.to_owned(),
            "endRange" => item.end_range = as_str(value, key)?.to_owned(),
            "description" => item.description = as_str(value, key)?.to_owned(),
            "rateCode" => item.rate_code = as_str(value, key)?.to_owned(),
            "pricePerUnit" => item.price_per_unit = decode_price_per_unit(as_object(value, key)?)?,
            // Shape-checked only; the contents are not interpreted.
            "appliesTo" => match value {
                Value::Object(_) | Value::Array(_) => {}
                other => {
                    return Err(DecodeError::UnexpectedType {
                        field: key.clone(),
                        expected: "object or array",
                        found: json_type(other),
                    });
                }
            },
            other => {
                return Err(DecodeError::UnexpectedField {
                    context: "price dimension",
                    field: other.to_owned(),
                });
            }
        }
    }

    Ok(item)
}

/// The catalog serves amounts as decimal strings; each one must parse
/// strictly as an f64, with the numeric error surfaced on failure.
fn decode_price_per_unit(entries: &Map<String, Value>) -> Result<Vec<(String, f64)>, DecodeError> {
    let mut prices = Vec::with_capacity(entries.len());

    for (currency, value) in entries {
        let text = as_str(value, currency)?;
        let amount = text
            .parse::<f64>()
            .map_err(|source| DecodeError::InvalidPrice {
                currency: currency.clone(),
                value: text.to_owned(),
                source,
            })?;
        prices.push((currency.clone(), amount));
    }

    Ok(prices)
}
