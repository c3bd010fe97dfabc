use aws_sdk_pricing::types::{Filter as PricingFilters, FilterType as PricingFilterType};

/// Term-match filters for querying Compute Instance products.
///
/// Only `instance_type` and `region` are mandatory; the optional fields
/// are added when set to narrow the result set the pricing API returns.
#[derive(Debug, Default)]
pub struct ComputeInstanceFilterBuilder {
    pub instance_type: String,
    pub region: String,
    pub tenancy: Option<String>,
    pub operating_system: Option<String>,
    pub capacity_status: Option<String>,
}

impl ComputeInstanceFilterBuilder {
    pub fn to_filter(&self) -> Vec<PricingFilters> {
        let mut filters = vec![
            PricingFilters::builder()
                .field("instanceType".to_string())
                .value(self.instance_type.clone())
                .r#type(PricingFilterType::TermMatch)
                .build()
                .expect("failed to build instanceType filter"),
            PricingFilters::builder()
                .field("regionCode".to_string())
                .value(self.region.clone())
                .r#type(PricingFilterType::TermMatch)
                .build()
                .expect("failed to build regionCode filter"),
        ];

        if let Some(ref tenancy) = self.tenancy {
            filters.push(
                PricingFilters::builder()
                    .field("tenancy".to_string())
                    .value(tenancy.clone())
                    .r#type(PricingFilterType::TermMatch)
                    .build()
                    .expect("failed to build tenancy filter"),
            );
        }

        if let Some(ref os) = self.operating_system {
            filters.push(
                PricingFilters::builder()
                    .field("operatingSystem".to_string())
                    .value(os.clone())
                    .r#type(PricingFilterType::TermMatch)
                    .build()
                    .expect("failed to build operatingSystem filter"),
            );
        }

        if let Some(ref cap_status) = self.capacity_status {
            filters.push(
                PricingFilters::builder()
                    .field("capacitystatus".to_string())
                    .value(cap_status.clone())
                    .r#type(PricingFilterType::TermMatch)
                    .build()
                    .expect("failed to build capacitystatus filter"),
            );
        }

        filters
    }
}
