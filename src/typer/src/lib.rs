//! Typed decoding of raw AWS Pricing API price lists.
//!
//! The `GetProducts` response is weakly typed JSON whose shape varies by
//! pricing term and attribute set. This crate walks that tree strictly,
//! producing validated [`PricingDocument`] values or a descriptive
//! [`DecodeError`] on the first unrecognized key or value shape.

pub mod decode;
pub mod error;
pub mod types;

pub use decode::decode_price_list;
pub use error::DecodeError;
pub use types::{
    OnDemandTerm, PriceDimension, PriceDimensionItem, PricingDocument, Product, ProductAttributes,
    ReservedTerm, ReservedTermAttributes, Terms,
};
