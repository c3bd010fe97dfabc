//! AWS Pricing API collaborator for the typed price-list decoder.
//!
//! Owns everything the decode core does not: credential resolution,
//! `GetProducts` pagination, transport JSON parsing, and retry.

pub mod client;
pub mod config;
pub mod filters;

pub use client::{decode_price_list_strings, PricingClient};
pub use config::{resolve_available_aws_config, AwsConfig};
pub use filters::ComputeInstanceFilterBuilder;
