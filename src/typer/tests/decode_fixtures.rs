//! End-to-end decode scenarios over full price-list fixtures shaped
//! like real `GetProducts` responses for AmazonEC2.

use pricing_typer::{decode_price_list, DecodeError};
use serde_json::{json, Value};

fn mock_product() -> Value {
    json!({
        "productFamily": "Compute Instance",
        "sku": "7X4K64YA59VZZAC3",
        "attributes": {
            "networkPerformance": "Moderate",
            "vcpu": "2",
            "capacitystatus": "Used",
            "operatingSystem": "Linux",
            "physicalProcessor": "Intel Xeon E5-2676 v3 (Haswell)",
            "ecu": "6.5",
            "preInstalledSw": "NA",
            "processorArchitecture": "64-bit",
            "enhancedNetworkingSupported": "Yes",
            "storage": "EBS",
            "clockSpeed": "2.4 GHz",
            "tenancy": "Shared",
            "licenseModel": "No License required",
            "servicecode": "AmazonEC2",
            "currentGeneration": "Yes",
            "dedicatedEbsThroughput": "450 Mbps",
            "servicename": "Amazon Elastic Compute Cloud",
            "instanceType": "m4.large",
            "normalizationSizeFactor": "4",
            "processorFeatures": "Intel AVX; Intel AVX2; Intel Turbo",
            "operation": "RunInstances",
            "memory": "8 GiB",
            "locationType": "AWS Region",
            "instanceFamily": "General purpose",
            "usagetype": "EU-BoxUsage:m4.large",
            "location": "EU (Ireland)",
        }
    })
}

fn mock_terms() -> Value {
    json!({
        "OnDemand": {
            "7X4K64YA59VZZAC3.JRTCKXETXF": {
                "sku": "7X4K64YA59VZZAC3",
                "effectiveDate": "2018-07-01T00:00:00Z",
                "offerTermCode": "JRTCKXETXF",
                "termAttributes": {},
                "priceDimensions": {
                    "7X4K64YA59VZZAC3.JRTCKXETXF.6YS6EN2CT7": {
                        "unit": "Hrs",
                        "endRange": "Inf",
                        "description": "$0.111 per On Demand Linux m4.large Instance Hour",
                        "appliesTo": {},
                        "rateCode": "7X4K64YA59VZZAC3.JRTCKXETXF.6YS6EN2CT7",
                        "beginRange": "0",
                        "pricePerUnit": { "USD": "0.1110000000" },
                    }
                }
            }
        },
        "Reserved": {
            "7X4K64YA59VZZAC3.4NA7Y494T4": {
                "sku": "7X4K64YA59VZZAC3",
                "effectiveDate": "2017-04-30T23:59:59Z",
                "offerTermCode": "4NA7Y494T4",
                "termAttributes": {
                    "LeaseContractLength": "1yr",
                    "OfferingClass": "standard",
                    "PurchaseOption": "No Upfront",
                },
                "priceDimensions": {
                    "7X4K64YA59VZZAC3.4NA7Y494T4.6YS6EN2CT7": {
                        "unit": "Hrs",
                        "endRange": "Inf",
                        "description": "Linux/UNIX (Amazon VPC), m4.large reserved instance applied",
                        "appliesTo": {},
                        "rateCode": "7X4K64YA59VZZAC3.4NA7Y494T4.6YS6EN2CT7",
                        "beginRange": "0",
                        "pricePerUnit": { "USD": "0.0756" },
                    }
                }
            }
        }
    })
}

fn mock_price_list(product: Value, terms: Value) -> Value {
    json!({
        "publicationDate": "2018-07-27T01:58:36Z",
        "version": "20180727015836",
        "serviceCode": "AmazonEC2",
        "product": product,
        "terms": terms,
    })
}

#[test]
fn good_data_decodes_to_one_document_per_entry() {
    let entry = mock_price_list(mock_product(), mock_terms());
    let docs = decode_price_list(std::slice::from_ref(&entry)).unwrap();

    assert_eq!(docs.len(), 1);
    let doc = &docs[0];
    assert_eq!(doc.publication_date, "2018-07-27T01:58:36Z");
    assert_eq!(doc.version, "20180727015836");
    assert_eq!(doc.service_code, "AmazonEC2");

    assert_eq!(doc.products.len(), 1);
    assert_eq!(doc.products[0].sku, "7X4K64YA59VZZAC3");
    assert_eq!(doc.products[0].attributes.instance_type, "m4.large");

    let on_demand = &doc.terms.on_demand["7X4K64YA59VZZAC3.JRTCKXETXF"];
    assert_eq!(on_demand.sku, "7X4K64YA59VZZAC3");
    assert_eq!(on_demand.price_dimensions.len(), 1);
    let item = &on_demand.price_dimensions[0]["7X4K64YA59VZZAC3.JRTCKXETXF.6YS6EN2CT7"];
    assert_eq!(item.price_for("USD"), Some(0.111));

    let reserved = &doc.terms.reserved["7X4K64YA59VZZAC3.4NA7Y494T4"];
    assert_eq!(reserved.term_attributes.purchase_option, "No Upfront");
    let item = &reserved.price_dimensions[0]["7X4K64YA59VZZAC3.4NA7Y494T4.6YS6EN2CT7"];
    assert_eq!(item.price_for("USD"), Some(0.0756));
}

#[test]
fn unimplemented_product_family_is_tolerated() {
    let mut product = mock_product();
    product["productFamily"] = json!("Bad Family");

    let entry = mock_price_list(product, mock_terms());
    let docs = decode_price_list(std::slice::from_ref(&entry)).unwrap();

    // SKU still captured, attribute fields left at their zero value.
    assert_eq!(docs[0].products[0].sku, "7X4K64YA59VZZAC3");
    assert_eq!(docs[0].products[0].attributes.instance_type, "");
    assert_eq!(docs[0].products[0].attributes.vcpu, "");
}

#[test]
fn unimplemented_price_list_item_fails() {
    let mut entry = mock_price_list(mock_product(), mock_terms());
    entry["badItem"] = json!("invalid");

    let err = decode_price_list(std::slice::from_ref(&entry)).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedPriceListItem(ref key) if key == "badItem"));
}

#[test]
fn unimplemented_product_item_fails() {
    let mut product = mock_product();
    product["badItem"] = json!("Bad Value");

    let entry = mock_price_list(product, mock_terms());
    let err = decode_price_list(std::slice::from_ref(&entry)).unwrap_err();
    assert!(err.to_string().contains("badItem"));
}

#[test]
fn unexpected_product_attribute_fails() {
    let mut product = mock_product();
    product["attributes"]["badAttr"] = json!("a value");

    let entry = mock_price_list(product, mock_terms());
    let err = decode_price_list(std::slice::from_ref(&entry)).unwrap_err();
    assert!(err.to_string().contains("badAttr"));
}

#[test]
fn non_mapping_terms_category_fails() {
    let mut terms = mock_terms();
    terms["Reserved"] = json!("badTypeValue");

    let entry = mock_price_list(mock_product(), terms);
    let err = decode_price_list(std::slice::from_ref(&entry)).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedType { .. }));
}

#[test]
fn applies_to_as_string_fails_for_on_demand() {
    let mut terms = mock_terms();
    terms["OnDemand"]["7X4K64YA59VZZAC3.JRTCKXETXF"]["priceDimensions"]
        ["7X4K64YA59VZZAC3.JRTCKXETXF.6YS6EN2CT7"]["appliesTo"] = json!("bad type");

    let entry = mock_price_list(mock_product(), terms);
    let err = decode_price_list(std::slice::from_ref(&entry)).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedType { ref field, .. } if field == "appliesTo"));
}

#[test]
fn applies_to_as_string_fails_for_reserved() {
    let mut terms = mock_terms();
    terms["Reserved"]["7X4K64YA59VZZAC3.4NA7Y494T4"]["priceDimensions"]
        ["7X4K64YA59VZZAC3.4NA7Y494T4.6YS6EN2CT7"]["appliesTo"] = json!("bad type");

    let entry = mock_price_list(mock_product(), terms);
    let err = decode_price_list(std::slice::from_ref(&entry)).unwrap_err();
    assert!(matches!(err, DecodeError::UnexpectedType { ref field, .. } if field == "appliesTo"));
}

#[test]
fn invalid_price_literal_fails_the_batch() {
    let mut terms = mock_terms();
    terms["OnDemand"]["7X4K64YA59VZZAC3.JRTCKXETXF"]["priceDimensions"]
        ["7X4K64YA59VZZAC3.JRTCKXETXF.6YS6EN2CT7"]["pricePerUnit"]["USD"] = json!("abc");

    let entry = mock_price_list(mock_product(), terms);
    let err = decode_price_list(std::slice::from_ref(&entry)).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidPrice { .. }));
}

#[test]
fn one_bad_entry_aborts_a_multi_entry_batch() {
    let good = mock_price_list(mock_product(), mock_terms());
    let mut bad = mock_price_list(mock_product(), mock_terms());
    bad["badItem"] = json!("invalid");

    assert!(decode_price_list(&[good, bad]).is_err());
}
