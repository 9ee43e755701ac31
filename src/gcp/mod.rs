//! Google Cloud resources bridged from the Terraform `google` provider.

pub mod bigquery;

pub mod compute;
