//! Resources provided by Terraform itself rather than by a cloud provider.

pub mod state;
