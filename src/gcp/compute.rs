//! Compute Engine networking resources, mirroring the Terraform
//! `google_compute_router_interface` schema.

use crate::resource::{NamedResource, Resource, ResourceOptions};
use serde::{Deserialize, Serialize};

/// Inputs accepted by [`RouterInterface`].
///
/// `name` is the interface's own name attribute and travels as `_name` on the
/// wire, so it never collides with the resource's logical name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RouterInterfaceArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_range: Option<String>,
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub router: String,
    pub vpn_tunnel: String,
}

/// An interface on a Cloud Router, attached to a VPN tunnel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouterInterface {
    #[serde(skip)]
    resource: NamedResource,
    #[serde(skip_serializing_if = "Option::is_none")]
    ip_range: Option<String>,
    #[serde(rename = "_name")]
    interface_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<String>,
    router: String,
    vpn_tunnel: String,
}

impl RouterInterface {
    pub fn new(name: impl Into<String>, args: RouterInterfaceArgs) -> Self {
        Self::with_options(name, args, ResourceOptions::default())
    }

    pub fn with_options(
        name: impl Into<String>,
        args: RouterInterfaceArgs,
        options: ResourceOptions,
    ) -> Self {
        Self {
            resource: NamedResource::new(Self::TYPE, name.into(), options),
            ip_range: args.ip_range,
            interface_name: args.name,
            project: args.project,
            region: args.region,
            router: args.router,
            vpn_tunnel: args.vpn_tunnel,
        }
    }

    pub fn ip_range(&self) -> Option<&str> {
        self.ip_range.as_deref()
    }

    /// The `_name` attribute. The logical name is [`Resource::name`].
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn router(&self) -> &str {
        &self.router
    }

    pub fn vpn_tunnel(&self) -> &str {
        &self.vpn_tunnel
    }
}

impl Resource for RouterInterface {
    const TYPE: &'static str = "gcp:compute:RouterInterface";

    fn named(&self) -> &NamedResource {
        &self.resource
    }
}
