//! BigQuery resources, mirroring the Terraform `google_bigquery_dataset` schema.

use crate::resource::{NamedResource, Resource, ResourceOptions};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap as Map;

/// Inputs accepted by [`DataSet`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DataSetArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<i64>,
    pub dataset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_table_expiration_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// A BigQuery dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    #[serde(skip)]
    resource: NamedResource,
    #[serde(skip_serializing_if = "Option::is_none")]
    creation_time: Option<i64>,
    dataset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_table_expiration_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    friendly_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<Map<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_modified_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    self_link: Option<String>,
}

impl DataSet {
    pub fn new(name: impl Into<String>, args: DataSetArgs) -> Self {
        Self::with_options(name, args, ResourceOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        args: DataSetArgs,
        options: ResourceOptions,
    ) -> Self {
        Self {
            resource: NamedResource::new(Self::TYPE, name.into(), options),
            creation_time: args.creation_time,
            dataset_id: args.dataset_id,
            default_table_expiration_ms: args.default_table_expiration_ms,
            description: args.description,
            etag: args.etag,
            friendly_name: args.friendly_name,
            labels: args.labels,
            last_modified_time: args.last_modified_time,
            location: args.location,
            project: args.project,
            self_link: args.self_link,
        }
    }

    pub fn creation_time(&self) -> Option<i64> {
        self.creation_time
    }

    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    pub fn default_table_expiration_ms(&self) -> Option<i64> {
        self.default_table_expiration_ms
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn etag(&self) -> Option<&str> {
        self.etag.as_deref()
    }

    pub fn friendly_name(&self) -> Option<&str> {
        self.friendly_name.as_deref()
    }

    pub fn labels(&self) -> Option<&Map<String, String>> {
        self.labels.as_ref()
    }

    pub fn last_modified_time(&self) -> Option<i64> {
        self.last_modified_time
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn self_link(&self) -> Option<&str> {
        self.self_link.as_deref()
    }
}

impl Resource for DataSet {
    const TYPE: &'static str = "gcp:bigquery:DataSet";

    fn named(&self) -> &NamedResource {
        &self.resource
    }
}
