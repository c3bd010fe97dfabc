use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::decode::price_dimension::decode_price_dimensions;
use crate::decode::{as_object, as_str};
use crate::error::DecodeError;
use crate::types::{
    OnDemandTerm, PriceDimension, PricingDocument, ReservedTerm, ReservedTermAttributes,
};

/// How a term category treats its `termAttributes` mapping. This is the
/// only difference between the two otherwise identical term walks.
#[derive(Clone, Copy)]
enum TermAttributePolicy {
    /// On-demand offers carry no term attributes; a non-empty mapping
    /// violates the category's structure.
    RequireEmpty,
    /// Reserved offers carry the three lease fields. Unknown sub-keys
    /// are tolerated here, and only here.
    CollectReserved,
}

/// Decodes the `terms` mapping into the document in place.
pub(crate) fn decode_terms(
    doc: &mut PricingDocument,
    fields: &Map<String, Value>,
) -> Result<(), DecodeError> {
    for (key, value) in fields {
        match key.as_str() {
            "OnDemand" => {
                doc.terms.on_demand = decode_offers(
                    as_object(value, key)?,
                    TermAttributePolicy::RequireEmpty,
                    |term| OnDemandTerm {
                        sku: term.sku,
                        effective_date: term.effective_date,
                        offer_term_code: term.offer_term_code,
                        price_dimensions: term.price_dimensions,
                    },
                )?;
            }
            "Reserved" => {
                doc.terms.reserved = decode_offers(
                    as_object(value, key)?,
                    TermAttributePolicy::CollectReserved,
                    |term| ReservedTerm {
                        sku: term.sku,
                        effective_date: term.effective_date,
                        offer_term_code: term.offer_term_code,
                        term_attributes: term.reserved_attributes,
                        price_dimensions: term.price_dimensions,
                    },
                )?;
            }
            other => {
                return Err(DecodeError::UnexpectedField {
                    context: "terms",
                    field: other.to_owned(),
                });
            }
        }
    }
    Ok(())
}

/// Fields shared by both term categories, collected by the common walk.
#[derive(Default)]
struct TermFields {
    sku: String,
    effective_date: String,
    offer_term_code: String,
    reserved_attributes: ReservedTermAttributes,
    price_dimensions: Vec<PriceDimension>,
}

fn decode_offers<T>(
    offers: &Map<String, Value>,
    policy: TermAttributePolicy,
    build: impl Fn(TermFields) -> T,
) -> Result<HashMap<String, T>, DecodeError> {
    let mut decoded = HashMap::with_capacity(offers.len());
    for (offer_key, value) in offers {
        let term = decode_term(offer_key, value, policy)?;
        decoded.insert(offer_key.clone(), build(term));
    }
    Ok(decoded)
}

fn decode_term(
    offer_key: &str,
    value: &Value,
    policy: TermAttributePolicy,
) -> Result<TermFields, DecodeError> {
    let fields = as_object(value, offer_key)?;
    let mut term = TermFields::default();

    for (key, value) in fields {
        match key.as_str() {
            "sku" => term.sku = as_str(value, key)?.to_owned(),
            "effectiveDate" => term.effective_date = as_str(value, key)?.to_owned(),
            "offerTermCode" => term.offer_term_code = as_str(value, key)?.to_owned(),
            "termAttributes" => {
                let attrs = as_object(value, key)?;
                match policy {
                    TermAttributePolicy::RequireEmpty => {
                        if !attrs.is_empty() {
                            return Err(DecodeError::NonEmptyTermAttributes {
                                offer_key: offer_key.to_owned(),
                            });
                        }
                    }
                    TermAttributePolicy::CollectReserved => {
                        term.reserved_attributes = decode_reserved_attributes(attrs)?;
                    }
                }
            }
            "priceDimensions" => term.price_dimensions = decode_price_dimensions(value)?,
            other => {
                return Err(DecodeError::UnexpectedField {
                    context: "term",
                    field: other.to_owned(),
                });
            }
        }
    }

    Ok(term)
}

fn decode_reserved_attributes(
    attrs: &Map<String, Value>,
) -> Result<ReservedTermAttributes, DecodeError> {
    let mut decoded = ReservedTermAttributes::default();
    for (key, value) in attrs {
        match key.as_str() {
            "LeaseContractLength" => decoded.lease_contract_length = as_str(value, key)?.to_owned(),
            "OfferingClass" => decoded.offering_class = as_str(value, key)?.to_owned(),
            "PurchaseOption" => decoded.purchase_option = as_str(value, key)?.to_owned(),
            // The one tolerated spot: unrecognized reserved term
            // attributes are dropped, not rejected.
            _ => {}
        }
    }
    Ok(decoded)
}
