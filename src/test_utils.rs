use crate::gcp::bigquery::DataSetArgs;
use crate::gcp::compute::RouterInterfaceArgs;
use crate::terraform::state::S3RemoteStateReferenceArgs;
use std::collections::BTreeMap as Map;

/// Dataset arguments with only the required field set.
pub fn minimal_dataset_args() -> DataSetArgs {
    DataSetArgs {
        dataset_id: "events_raw".to_string(),
        ..Default::default()
    }
}

/// Dataset arguments with every field set.
pub fn full_dataset_args() -> DataSetArgs {
    let mut labels = Map::new();
    labels.insert("env".to_string(), "prod".to_string());
    labels.insert("team".to_string(), "data".to_string());

    DataSetArgs {
        creation_time: Some(1_500_000_000_000),
        dataset_id: "events_raw".to_string(),
        default_table_expiration_ms: Some(3_600_000),
        description: Some("Raw event stream".to_string()),
        etag: Some("abc123".to_string()),
        friendly_name: Some("Events".to_string()),
        labels: Some(labels),
        last_modified_time: Some(1_500_000_100_000),
        location: Some("EU".to_string()),
        project: Some("acme-analytics".to_string()),
        self_link: Some(
            "https://bigquery.googleapis.com/bigquery/v2/projects/acme-analytics/datasets/events_raw"
                .to_string(),
        ),
    }
}

/// Router interface arguments with only the required fields set.
pub fn router_interface_args() -> RouterInterfaceArgs {
    RouterInterfaceArgs {
        name: "if-tunnel-1".to_string(),
        router: "edge-router".to_string(),
        vpn_tunnel: "tunnel-1".to_string(),
        ..Default::default()
    }
}

pub fn s3_args() -> S3RemoteStateReferenceArgs {
    S3RemoteStateReferenceArgs::new("acme-tfstate", "network/terraform.tfstate")
}
