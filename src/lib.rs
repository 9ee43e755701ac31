//! This crate provides typed resource definitions bridged from Terraform provider schemas,
//! for use by infrastructure-as-code programs.
//!
//! Each resource type pairs an arguments record (e.g. [`gcp::bigquery::DataSetArgs`]) with a
//! resource (e.g. [`gcp::bigquery::DataSet`]). Constructing a resource copies every argument
//! onto an immutable property and records the resource's logical name. Optional arguments
//! that were not given stay absent; nothing is defaulted or validated.
//!
//! ## Quick Start
//!
//! ```
//! use tfbridge_resources::config::StackConfig;
//! use tfbridge_resources::gcp::bigquery::{DataSet, DataSetArgs};
//! use tfbridge_resources::resource::{Resource, Stack};
//!
//! let dataset = DataSet::new(
//!     "events",
//!     DataSetArgs {
//!         dataset_id: "events_raw".to_owned(),
//!         location: Some("EU".to_owned()),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(dataset.name(), "events");
//! assert_eq!(dataset.location(), Some("EU"));
//! assert_eq!(dataset.friendly_name(), None);
//!
//! let mut stack = Stack::new(StackConfig::new("analytics".to_owned()));
//! let urn = stack.register(&dataset).unwrap();
//! assert_eq!(urn.as_str(), "urn:dev::analytics::gcp:bigquery:DataSet::events");
//! ```
//!
//! ## Declaring resources from JSON
//!
//! The `tfresources` binary registers resources declared in a JSON document and prints the
//! resulting registrations:
//!
//! ```bash
//! cargo run --bin tfresources -- preview tests/fixtures/declarations.json --project acme
//! ```
//!
//! Attach the outputs of a local Terraform state file to a remote state reference with
//! `--state network=tests/fixtures/network.tfstate`.
//!
//! The argument shape of a resource type is available with:
//!
//! ```bash
//! cargo run --bin tfresources -- describe gcp:bigquery:DataSet
//! ```
//!
//! ## Quickstart Example
//!
//! ```bash
//! cargo run --example quickstart
//! ```

// stack configuration
pub mod config;

pub mod error;

// named-resource base and stack registry
pub mod resource;

pub mod gcp;

pub mod terraform;

// argument shapes
pub mod schema;

// JSON declarations
pub mod declare;

/// Sample arguments shared by tests.
#[doc(hidden)]
pub mod test_utils;

pub use error::{Error, Result};
