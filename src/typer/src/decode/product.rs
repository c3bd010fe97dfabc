use serde_json::{Map, Value};

use crate::decode::as_str;
use crate::error::{json_type, DecodeError};
use crate::types::{Product, ProductAttributes};

/// Only this product family has its attribute bag retained; every other
/// family is tolerated as a no-op at the family check.
const COMPUTE_INSTANCE_FAMILY: &str = "Compute Instance";

/// Decodes one raw product mapping.
///
/// String-valued keys must be `productFamily` or `sku`; the single
/// object-valued key is the attribute bag. A family other than
/// "Compute Instance" skips attribute retention, but the bag is still
/// validated and unknown field names stay fatal regardless of family.
pub(crate) fn decode_product(fields: &Map<String, Value>) -> Result<Product, DecodeError> {
    // Skip retention only when the family is present and mismatched; an
    // absent family still has its attribute bag kept.
    let family = fields.get("productFamily").and_then(Value::as_str);
    let skip_attributes = family.is_some_and(|f| f != COMPUTE_INSTANCE_FAMILY);

    let mut product = Product::default();

    for (key, value) in fields {
        match value {
            Value::String(text) => match key.as_str() {
                "productFamily" => {
                    if skip_attributes {
                        tracing::debug!(family = %text, "skipping attributes for product family");
                    } else {
                        product.product_family = text.clone();
                    }
                }
                "sku" => product.sku = text.clone(),
                other => {
                    return Err(DecodeError::UnexpectedField {
                        context: "product",
                        field: other.to_owned(),
                    });
                }
            },
            Value::Object(bag) => {
                let attributes = decode_attributes(bag)?;
                if !skip_attributes {
                    product.attributes = attributes;
                }
            }
            other => {
                return Err(DecodeError::UnexpectedType {
                    field: key.clone(),
                    expected: "string or object",
                    found: json_type(other),
                });
            }
        }
    }

    Ok(product)
}

/// Walks the attribute bag against the fixed attribute set. The set is
/// closed: there is no ignore-unknown policy here.
fn decode_attributes(bag: &Map<String, Value>) -> Result<ProductAttributes, DecodeError> {
    let mut attributes = ProductAttributes::default();

    for (key, value) in bag {
        let text = as_str(value, key)?.to_owned();
        match key.as_str() {
            "networkPerformance" => attributes.network_performance = text,
            "vcpu" => attributes.vcpu = text,
            "capacitystatus" => attributes.capacity_status = text,
            "operatingSystem" => attributes.operating_system = text,
            "physicalProcessor" => attributes.physical_processor = text,
            "ecu" => attributes.ecu = text,
            "preInstalledSw" => attributes.pre_installed_sw = text,
            "processorArchitecture" => attributes.processor_architecture = text,
            "enhancedNetworkingSupported" => attributes.enhanced_networking_supported = text,
            "storage" => attributes.storage = text,
            "clockSpeed" => attributes.clock_speed = text,
            "tenancy" => attributes.tenancy = text,
            "licenseModel" => attributes.license_model = text,
            "servicecode" => attributes.service_code = text,
            "currentGeneration" => attributes.current_generation = text,
            "dedicatedEbsThroughput" => attributes.dedicated_ebs_throughput = text,
            "servicename" => attributes.service_name = text,
            "instanceType" => attributes.instance_type = text,
            "normalizationSizeFactor" => attributes.normalization_size_factor = text,
            "processorFeatures" => attributes.processor_features = text,
            "operation" => attributes.operation = text,
            "memory" => attributes.memory = text,
            "locationType" => attributes.location_type = text,
            "instanceFamily" => attributes.instance_family = text,
            "usagetype" => attributes.usage_type = text,
            "location" => attributes.location = text,
            other => {
                return Err(DecodeError::UnexpectedField {
                    context: "product attribute",
                    field: other.to_owned(),
                });
            }
        }
    }

    Ok(attributes)
}
