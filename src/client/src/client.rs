use anyhow::Context;
use aws_sdk_pricing as pricing;
use aws_sdk_pricing::types::Filter as PricingFilters;
use serde_json::Value;
use tokio_retry::strategy::ExponentialBackoff;
use tokio_retry::Retry;

use pricing_typer::{decode_price_list, PricingDocument};

use crate::config::{resolve_available_aws_config, AwsConfig};

const PRICING_SERVICE_CODE: &str = "AmazonEC2";

/// Client for the AWS Pricing API that yields typed pricing documents.
pub struct PricingClient {
    pub pricing_client: Option<pricing::Client>,
}

impl PricingClient {
    /// Creates a new PricingClient instance
    /// Note: Currently only us-east-1 region is supported for the pricing API
    pub async fn new(initialization_conf: AwsConfig, _region: &'static str) -> Self {
        let region = "us-east-1";
        let config = resolve_available_aws_config(initialization_conf, region).await;

        match config {
            Some(ref conf) => Self {
                pricing_client: Some(pricing::client::Client::new(conf)),
            },
            None => Self {
                pricing_client: None,
            },
        }
    }

    /// Pages the full `GetProducts` response for AmazonEC2, then runs the
    /// strict decoder over the whole batch. Network fetches are retried;
    /// a decode failure is final and aborts with the underlying error.
    pub async fn get_typed_pricing_data(
        &self,
        filters: Option<Vec<PricingFilters>>,
    ) -> anyhow::Result<Vec<PricingDocument>> {
        let raw = self.retry_fetch_price_list(filters).await?;
        tracing::info!(entries = raw.len(), "fetched price list");

        let documents = decode_price_list(&raw)?;
        Ok(documents)
    }

    async fn retry_fetch_price_list(
        &self,
        filters: Option<Vec<PricingFilters>>,
    ) -> anyhow::Result<Vec<Value>> {
        let strategy = ExponentialBackoff::from_millis(500).take(3);

        Retry::spawn(strategy, {
            let filters = filters.clone();
            move || {
                let filters = filters.clone();
                async move { self.fetch_price_list(filters).await }
            }
        })
        .await
    }

    async fn fetch_price_list(
        &self,
        filters: Option<Vec<PricingFilters>>,
    ) -> anyhow::Result<Vec<Value>> {
        let client = self
            .pricing_client
            .as_ref()
            .context("pricing client is not initialized")?;

        let mut paginator = client
            .get_products()
            .service_code(PRICING_SERVICE_CODE)
            .set_filters(filters)
            .into_paginator()
            .send();

        let mut entries = Vec::new();

        while let Some(output) = paginator.next().await {
            let output = output.context("failed to fetch a GetProducts page")?;
            for product in output.price_list() {
                let value: Value = serde_json::from_str(product)
                    .context("price list entry is not valid JSON")?;
                entries.push(value);
            }
        }

        Ok(entries)
    }
}

/// Parses raw price-list JSON strings, as served by `GetProducts`, and
/// decodes the batch. Shared by the client path and by callers that
/// already hold a fetched response.
pub fn decode_price_list_strings<S: AsRef<str>>(
    price_list: &[S],
) -> anyhow::Result<Vec<PricingDocument>> {
    let mut entries = Vec::with_capacity(price_list.len());
    for raw in price_list {
        let value: Value =
            serde_json::from_str(raw.as_ref()).context("price list entry is not valid JSON")?;
        entries.push(value);
    }

    let documents = decode_price_list(&entries)?;
    Ok(documents)
}
