use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One fully typed price-list entry: the product description together
/// with its on-demand and reserved pricing terms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingDocument {
    pub publication_date: String,
    pub version: String,
    pub service_code: String,
    pub products: Vec<Product>,
    pub terms: Terms,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    pub product_family: String,
    pub sku: String,
    pub attributes: ProductAttributes,
}

/// The closed attribute set carried by "Compute Instance" products.
///
/// Field renames follow the catalog's own key spelling, which mixes
/// camelCase with all-lowercase names. The set is fixed: the decoder
/// rejects any attribute key outside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributes {
    #[serde(rename = "networkPerformance")]
    pub network_performance: String,
    #[serde(rename = "vcpu")]
    pub vcpu: String,
    #[serde(rename = "capacitystatus")]
    pub capacity_status: String,
    #[serde(rename = "operatingSystem")]
    pub operating_system: String,
    #[serde(rename = "physicalProcessor")]
    pub physical_processor: String,
    #[serde(rename = "ecu")]
    pub ecu: String,
    #[serde(rename = "preInstalledSw")]
    pub pre_installed_sw: String,
    #[serde(rename = "processorArchitecture")]
    pub processor_architecture: String,
    #[serde(rename = "enhancedNetworkingSupported")]
    pub enhanced_networking_supported: String,
    #[serde(rename = "storage")]
    pub storage: String,
    #[serde(rename = "clockSpeed")]
    pub clock_speed: String,
    #[serde(rename = "tenancy")]
    pub tenancy: String,
    #[serde(rename = "licenseModel")]
    pub license_model: String,
    #[serde(rename = "servicecode")]
    pub service_code: String,
    #[serde(rename = "currentGeneration")]
    pub current_generation: String,
    #[serde(rename = "dedicatedEbsThroughput")]
    pub dedicated_ebs_throughput: String,
    #[serde(rename = "servicename")]
    pub service_name: String,
    #[serde(rename = "instanceType")]
    pub instance_type: String,
    #[serde(rename = "normalizationSizeFactor")]
    pub normalization_size_factor: String,
    #[serde(rename = "processorFeatures")]
    pub processor_features: String,
    #[serde(rename = "operation")]
    pub operation: String,
    #[serde(rename = "memory")]
    pub memory: String,
    #[serde(rename = "locationType")]
    pub location_type: String,
    #[serde(rename = "instanceFamily")]
    pub instance_family: String,
    #[serde(rename = "usagetype")]
    pub usage_type: String,
    #[serde(rename = "location")]
    pub location: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Terms {
    pub on_demand: HashMap<String, OnDemandTerm>,
    pub reserved: HashMap<String, ReservedTerm>,
}

/// On-demand offers structurally carry no term attributes; the decoder
/// rejects a non-empty `termAttributes` mapping for this category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OnDemandTerm {
    pub sku: String,
    pub effective_date: String,
    pub offer_term_code: String,
    pub price_dimensions: Vec<PriceDimension>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservedTerm {
    pub sku: String,
    pub effective_date: String,
    pub offer_term_code: String,
    pub term_attributes: ReservedTermAttributes,
    pub price_dimensions: Vec<PriceDimension>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservedTermAttributes {
    pub lease_contract_length: String,
    pub offering_class: String,
    pub purchase_option: String,
}

/// One pricing tier, keyed by its rate code.
pub type PriceDimension = HashMap<String, PriceDimensionItem>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceDimensionItem {
    pub unit: String,
    pub begin_range: String,
    pub end_range: String,
    pub description: String,
    pub rate_code: String,
    /// Currency code paired with the parsed amount, in input traversal
    /// order. The catalog serves amounts as decimal strings; they are
    /// parsed strictly during decode.
    pub price_per_unit: Vec<(String, f64)>,
}

impl PriceDimensionItem {
    pub fn price_for(&self, currency: &str) -> Option<f64> {
        self.price_per_unit
            .iter()
            .find(|(code, _)| code == currency)
            .map(|(_, amount)| *amount)
    }
}
