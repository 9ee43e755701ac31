//! JSON documents declaring a set of named resources, and their registration
//! into a [`Stack`].
//!
//! ```json
//! {
//!     "resources": {
//!         "events": {
//!             "type": "gcp:bigquery:DataSet",
//!             "properties": { "datasetId": "events_raw" },
//!             "options": { "protect": true }
//!         }
//!     }
//! }
//! ```

use crate::error::{Error, Result};
use crate::gcp::bigquery::DataSet;
use crate::gcp::compute::RouterInterface;
use crate::resource::{Resource, ResourceOptions, Stack, Urn};
use crate::terraform::state::{RemoteStateBackend, RemoteStateReference, TerraformState};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declarations {
    #[serde(default, deserialize_with = "unique_resources")]
    pub resources: BTreeMap<String, Declaration>,
}

/// One resource: its type token, its arguments and its options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Declaration {
    #[serde(rename = "type")]
    pub type_token: String,
    pub properties: Value,
    #[serde(default, skip_serializing_if = "ResourceOptions::is_empty")]
    pub options: ResourceOptions,
}

// A repeated name must fail rather than silently replace the earlier entry.
fn unique_resources<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, Declaration>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueResources;

    impl<'de> Visitor<'de> for UniqueResources {
        type Value = BTreeMap<String, Declaration>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of resource declarations")
        }

        fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut resources = BTreeMap::new();
            while let Some((name, decl)) = access.next_entry::<String, Declaration>()? {
                if resources.contains_key(&name) {
                    return Err(de::Error::custom(format!(
                        "duplicate resource name `{}`",
                        name
                    )));
                }
                resources.insert(name, decl);
            }
            Ok(resources)
        }
    }

    deserializer.deserialize_map(UniqueResources)
}

/// A declaration decoded into its resource, not yet registered.
enum Declared {
    DataSet(DataSet),
    RouterInterface(RouterInterface),
    RemoteStateReference(RemoteStateReference),
}

impl Declared {
    fn register(&self, stack: &mut Stack) -> Result<Urn> {
        match self {
            Declared::DataSet(r) => stack.register(r),
            Declared::RouterInterface(r) => stack.register(r),
            Declared::RemoteStateReference(r) => stack.register(r),
        }
    }
}

impl Declarations {
    /// Register every declared resource in name order.
    pub fn declare(&self, stack: &mut Stack) -> Result<Vec<Urn>> {
        self.declare_with_states(stack, &BTreeMap::new())
    }

    /// Like [`Declarations::declare`], attaching `states[name]` to the remote
    /// state reference declared as `name`.
    ///
    /// Either every resource is registered or, on error, none is.
    pub fn declare_with_states(
        &self,
        stack: &mut Stack,
        states: &BTreeMap<String, TerraformState>,
    ) -> Result<Vec<Urn>> {
        for name in states.keys() {
            if !self.resources.contains_key(name) {
                warn!(name = %name, "state given for a resource that is not declared");
            }
        }

        let mut declared = Vec::with_capacity(self.resources.len());
        for (name, decl) in &self.resources {
            debug!(name = %name, type_token = %decl.type_token, "declaring resource");
            let state = states.get(name);
            if state.is_some() && decl.type_token != RemoteStateReference::TYPE {
                warn!(name = %name, "state given for a resource that is not a remote state reference");
            }
            declared.push(decl.build(name, state)?);
        }

        let start = stack.len();
        let mut urns = Vec::with_capacity(declared.len());
        for resource in &declared {
            match resource.register(stack) {
                Ok(urn) => urns.push(urn),
                Err(err) => {
                    stack.truncate(start);
                    return Err(err);
                }
            }
        }
        info!(count = urns.len(), "declared resources");
        Ok(urns)
    }
}

impl Declaration {
    fn build(&self, name: &str, state: Option<&TerraformState>) -> Result<Declared> {
        let options = self.options.clone();
        match self.type_token.as_str() {
            DataSet::TYPE => {
                let args = serde_json::from_value(self.properties.clone())?;
                Ok(Declared::DataSet(DataSet::with_options(name, args, options)))
            }
            RouterInterface::TYPE => {
                let args = serde_json::from_value(self.properties.clone())?;
                Ok(Declared::RouterInterface(RouterInterface::with_options(
                    name, args, options,
                )))
            }
            RemoteStateReference::TYPE => {
                let backend: RemoteStateBackend = serde_json::from_value(self.properties.clone())?;
                let mut reference = RemoteStateReference::with_options(name, backend, options);
                if let Some(state) = state {
                    reference = reference.with_state(state);
                }
                Ok(Declared::RemoteStateReference(reference))
            }
            other => Err(Error::UnknownResourceType(other.to_string())),
        }
    }
}

pub fn read_declarations_from_file<P: AsRef<Path>>(path: P) -> Result<Declarations> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
