//! The named-resource base shared by every resource type, and the stack that
//! records registrations under their logical names.

use crate::config::StackConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Stack-scoped identifier of a registered resource.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Urn(String);

impl Urn {
    pub fn new(config: &StackConfig, type_token: &str, name: &str) -> Self {
        Urn(format!(
            "urn:{}::{}::{}::{}",
            config.stack(),
            config.project(),
            type_token,
            name
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Urn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options controlling how the surrounding tooling treats a resource.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceOptions {
    /// Provider-assigned ID of an existing resource to adopt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<Urn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protect: Option<bool>,
}

impl ResourceOptions {
    /// Overlay `other` on top of `self`. Scalars set in `other` win, dependencies
    /// are concatenated without duplicates.
    pub fn merge(mut self, other: ResourceOptions) -> Self {
        if other.id.is_some() {
            self.id = other.id;
        }
        if other.protect.is_some() {
            self.protect = other.protect;
        }
        for dep in other.depends_on {
            if !self.depends_on.contains(&dep) {
                self.depends_on.push(dep);
            }
        }
        self
    }

    pub fn is_protected(&self) -> bool {
        self.protect.unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self == &ResourceOptions::default()
    }
}

/// Base record embedded in every resource: its type token, its logical name and
/// its options.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedResource {
    type_token: &'static str,
    name: String,
    options: ResourceOptions,
}

impl NamedResource {
    pub fn new(type_token: &'static str, name: String, options: ResourceOptions) -> Self {
        Self {
            type_token,
            name,
            options,
        }
    }

    pub fn type_token(&self) -> &'static str {
        self.type_token
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ResourceOptions {
        &self.options
    }
}

/// A resource type. Serializing a resource yields its input properties.
pub trait Resource: Serialize {
    /// Type token in `provider:module:Type` form.
    const TYPE: &'static str;

    fn named(&self) -> &NamedResource;

    fn name(&self) -> &str {
        self.named().name()
    }

    fn type_token(&self) -> &'static str {
        self.named().type_token()
    }

    fn options(&self) -> &ResourceOptions {
        self.named().options()
    }
}

/// A resource as recorded by [`Stack::register`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Registration {
    pub urn: Urn,
    #[serde(rename = "type")]
    pub type_token: String,
    pub name: String,
    #[serde(skip_serializing_if = "ResourceOptions::is_empty")]
    pub options: ResourceOptions,
    pub properties: Value,
}

/// Registrations of one stack, kept in registration order.
#[derive(Debug)]
pub struct Stack {
    config: StackConfig,
    registrations: Vec<Registration>,
    index: BTreeMap<Urn, usize>,
}

impl Stack {
    pub fn new(config: StackConfig) -> Self {
        Self {
            config,
            registrations: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Record `resource` under its logical name and return its URN.
    pub fn register<R: Resource>(&mut self, resource: &R) -> Result<Urn> {
        let urn = Urn::new(&self.config, R::TYPE, resource.name());
        if self.index.contains_key(&urn) {
            return Err(Error::DuplicateResource { urn });
        }

        let properties = serde_json::to_value(resource)?;
        debug!(urn = %urn, "registering resource");

        self.index.insert(urn.clone(), self.registrations.len());
        self.registrations.push(Registration {
            urn: urn.clone(),
            type_token: R::TYPE.to_string(),
            name: resource.name().to_string(),
            options: resource.options().clone(),
            properties,
        });
        Ok(urn)
    }

    /// Drop every registration made after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) {
        for reg in self.registrations.drain(len..) {
            self.index.remove(&reg.urn);
        }
    }

    pub fn get(&self, urn: &Urn) -> Option<&Registration> {
        self.index.get(urn).map(|pos| &self.registrations[*pos])
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gcp::bigquery::DataSet;
    use crate::gcp::compute::RouterInterface;
    use crate::test_utils::{minimal_dataset_args, router_interface_args};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn stack() -> Stack {
        Stack::new(StackConfig::new("analytics".to_string()))
    }

    #[test]
    fn test_urn_format() {
        let config = StackConfig::new("analytics".to_string()).with_stack("prod".to_string());
        let urn = Urn::new(&config, DataSet::TYPE, "events");
        assert_eq!(
            urn.as_str(),
            "urn:prod::analytics::gcp:bigquery:DataSet::events"
        );
    }

    #[test]
    fn test_register_records_properties() {
        let mut stack = stack();
        let dataset = DataSet::new("events", minimal_dataset_args());
        let urn = stack.register(&dataset).unwrap();

        let reg = stack.get(&urn).unwrap();
        assert_eq!(reg.name, "events");
        assert_eq!(reg.type_token, dataset.type_token());
        // absent optionals stay absent
        assert_eq!(reg.properties, json!({ "datasetId": "events_raw" }));
    }

    #[test]
    fn test_register_duplicate_name() {
        let mut stack = stack();
        stack
            .register(&DataSet::new("events", minimal_dataset_args()))
            .unwrap();
        let err = stack
            .register(&DataSet::new("events", minimal_dataset_args()))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateResource { .. }));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_same_name_different_types() {
        let mut stack = stack();
        stack
            .register(&DataSet::new("shared", minimal_dataset_args()))
            .unwrap();
        stack
            .register(&RouterInterface::new("shared", router_interface_args()))
            .unwrap();
        let names: Vec<_> = stack
            .registrations()
            .iter()
            .map(|r| r.type_token.as_str())
            .collect();
        assert_eq!(names, vec!["gcp:bigquery:DataSet", "gcp:compute:RouterInterface"]);
    }

    #[test]
    fn test_merge_options() {
        let dep_a = Urn("urn:a".to_string());
        let dep_b = Urn("urn:b".to_string());
        let base = ResourceOptions {
            id: Some("old".to_string()),
            depends_on: vec![dep_a.clone()],
            protect: Some(true),
        };
        let merged = base.merge(ResourceOptions {
            id: Some("new".to_string()),
            depends_on: vec![dep_a.clone(), dep_b.clone()],
            protect: None,
        });
        assert_eq!(merged.id.as_deref(), Some("new"));
        assert_eq!(merged.depends_on, vec![dep_a, dep_b]);
        assert!(merged.is_protected());
    }

    #[test]
    fn test_options_serialization() {
        let reg = Registration {
            urn: Urn("urn:x".to_string()),
            type_token: "t".to_string(),
            name: "x".to_string(),
            options: ResourceOptions::default(),
            properties: json!({}),
        };
        let value = serde_json::to_value(&reg).unwrap();
        assert!(value.get("options").is_none());
        assert_eq!(value["type"], "t");
    }

    #[test]
    fn test_options_from_json() {
        let options: ResourceOptions = serde_json::from_value(json!({
            "id": "projects/acme/datasets/events_raw",
            "dependsOn": ["urn:a", "urn:b"],
            "protect": true
        }))
        .unwrap();
        assert_eq!(options.id.as_deref(), Some("projects/acme/datasets/events_raw"));
        assert_eq!(
            options.depends_on,
            vec![Urn("urn:a".to_string()), Urn("urn:b".to_string())]
        );
        assert!(options.is_protected());
    }

    #[test]
    fn test_options_default_when_absent() {
        let options: ResourceOptions = serde_json::from_value(json!({})).unwrap();
        assert!(options.is_empty());
        assert!(!options.is_protected());
        assert!(options.depends_on.is_empty());
    }

    #[test]
    fn test_options_reject_unknown_keys() {
        // snake_case is not the wire name
        let res = serde_json::from_value::<ResourceOptions>(json!({ "depends_on": ["urn:a"] }));
        assert!(res.is_err());
    }

    #[test]
    fn test_truncate_forgets_urns() {
        let mut stack = stack();
        stack
            .register(&DataSet::new("events", minimal_dataset_args()))
            .unwrap();
        let urn = stack
            .register(&RouterInterface::new("edge-if", router_interface_args()))
            .unwrap();
        stack.truncate(1);
        assert_eq!(stack.len(), 1);
        assert!(stack.get(&urn).is_none());
        // the name can be registered again
        stack
            .register(&RouterInterface::new("edge-if", router_interface_args()))
            .unwrap();
    }
}
