//! References to Terraform remote state, whose root outputs can be read by
//! other resources in the program.

use crate::error::{Error, Result};
use crate::resource::{NamedResource, Resource, ResourceOptions};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::{BTreeMap as Map, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// State document version whose root outputs live at the top level.
pub const SUPPORTED_STATE_VERSION: u64 = 4;

/// Configuration for a Terraform remote state stored in the S3 backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct S3RemoteStateReferenceArgs {
    /// The name of the S3 bucket.
    pub bucket: String,
    /// Path to the state file inside the bucket. With a non-default workspace the
    /// state path is `/workspace_key_prefix/workspace_name/key`.
    pub key: String,
    /// Also sourced from `AWS_DEFAULT_REGION` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Custom S3 API endpoint. Also sourced from `AWS_S3_ENDPOINT` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    /// Profile name in the shared credentials file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Defaults to `~/.aws/credentials` when a profile is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_credentials_file: Option<String>,
    /// MFA token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// IAM role assumed to read the state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
    /// Only relevant for non-default workspaces. Defaults to `env:`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_key_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sts_endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_credentials_validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_region_validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_metadata_api_check: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_path_style: Option<bool>,
    /// The Terraform workspace from which to read state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

impl S3RemoteStateReferenceArgs {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
            ..Default::default()
        }
    }
}

/// Backend holding the referenced state, discriminated by `backendType`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backendType", rename_all = "lowercase")]
#[non_exhaustive]
pub enum RemoteStateBackend {
    S3(S3RemoteStateReferenceArgs),
}

impl RemoteStateBackend {
    pub fn backend_type(&self) -> &'static str {
        match self {
            RemoteStateBackend::S3(_) => "s3",
        }
    }
}

impl From<S3RemoteStateReferenceArgs> for RemoteStateBackend {
    fn from(args: S3RemoteStateReferenceArgs) -> Self {
        RemoteStateBackend::S3(args)
    }
}

/// A reference to a Terraform remote state. The resource ID is always its
/// logical name.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteStateReference {
    resource: NamedResource,
    backend: RemoteStateBackend,
    outputs: Map<String, Value>,
    sensitive: BTreeSet<String>,
}

impl RemoteStateReference {
    pub fn new(name: impl Into<String>, backend: impl Into<RemoteStateBackend>) -> Self {
        Self::with_options(name, backend, ResourceOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        backend: impl Into<RemoteStateBackend>,
        options: ResourceOptions,
    ) -> Self {
        let name = name.into();
        let options = options.merge(ResourceOptions {
            id: Some(name.clone()),
            ..Default::default()
        });
        Self {
            resource: NamedResource::new(Self::TYPE, name, options),
            backend: backend.into(),
            outputs: Map::new(),
            sensitive: BTreeSet::new(),
        }
    }

    /// Attach the root outputs of `state`.
    pub fn with_state(mut self, state: &TerraformState) -> Self {
        debug!(
            name = %self.resource.name(),
            outputs = state.outputs.len(),
            "attaching remote state outputs"
        );
        self.outputs = state
            .outputs
            .iter()
            .map(|(name, output)| (name.clone(), output.value.clone()))
            .collect();
        self.sensitive = state
            .outputs
            .iter()
            .filter(|(_, output)| output.sensitive)
            .map(|(name, _)| name.clone())
            .collect();
        self
    }

    pub fn backend(&self) -> &RemoteStateBackend {
        &self.backend
    }

    /// Root outputs of the referenced state.
    pub fn outputs(&self) -> &Map<String, Value> {
        &self.outputs
    }

    /// Value of the root output `name`, formatted exactly as in the `output`
    /// block of the Terraform configuration.
    pub fn get_output(&self, name: &str) -> Option<&Value> {
        self.outputs.get(name)
    }

    /// Whether the root output `name` is marked sensitive in the state.
    pub fn is_sensitive_output(&self, name: &str) -> bool {
        self.sensitive.contains(name)
    }
}

// Outputs are read from state, not inputs of the reference.
impl Serialize for RemoteStateReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.backend.serialize(serializer)
    }
}

impl Resource for RemoteStateReference {
    const TYPE: &'static str = "terraform:state:RemoteStateReference";

    fn named(&self) -> &NamedResource {
        &self.resource
    }
}

/// A root output as stored in a state document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateOutput {
    pub value: Value,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<Value>,
    #[serde(default)]
    pub sensitive: bool,
}

/// The parts of a Terraform state document needed to read root outputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerraformState {
    pub version: u64,
    #[serde(default)]
    pub terraform_version: Option<String>,
    #[serde(default)]
    pub serial: Option<u64>,
    #[serde(default)]
    pub lineage: Option<String>,
    #[serde(default)]
    pub outputs: Map<String, StateOutput>,
}

impl TerraformState {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let state: TerraformState = serde_json::from_reader(reader)?;
        if state.version != SUPPORTED_STATE_VERSION {
            return Err(Error::UnsupportedStateVersion(state.version));
        }
        Ok(state)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
