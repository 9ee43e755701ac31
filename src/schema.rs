// SPDX-License-Identifier: MIT OR Apache-2.0

//!
//! Argument shapes of the known resource types, traced with serde-reflection
//! and rendered as indented listings.
//!
use crate::error::{Error, Result};
use crate::gcp::bigquery::{DataSet, DataSetArgs};
use crate::gcp::compute::{RouterInterface, RouterInterfaceArgs};
use crate::resource::Resource;
use crate::terraform::state::{
    RemoteStateBackend, RemoteStateReference, S3RemoteStateReferenceArgs,
};
use serde::de::DeserializeOwned;
use serde_generate::indent::{IndentConfig, IndentedWriter};
use serde_reflection::{ContainerFormat, Format, Samples, Tracer, TracerConfig};
use std::collections::BTreeMap;
use std::io::Write;

/// Known resource types indexed by type token.
pub type ResourceTypes = BTreeMap<&'static str, ResourceType>;

/// A resource type and the shape of the arguments it accepts.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceType {
    pub token: &'static str,
    pub description: &'static str,
    /// Argument record name as traced (e.g. `DataSetArgs`).
    pub args_name: String,
    /// Tag field and value that must accompany the arguments (e.g. `backendType: "s3"`).
    pub discriminator: Option<(&'static str, &'static str)>,
    pub format: ContainerFormat,
}

/// Trace the container format of an arguments record.
pub fn args_format<T: DeserializeOwned>() -> Result<(String, ContainerFormat)> {
    let mut tracer = Tracer::new(TracerConfig::default());
    let samples = Samples::new();
    let (format, _) = tracer.trace_type::<T>(&samples)?;
    let mut registry = tracer.registry()?;

    match format {
        Format::TypeName(name) => match registry.remove(&name) {
            Some(container) => Ok((name, container)),
            None => Err(Error::UnknownResourceType(name)),
        },
        other => Err(Error::UnknownResourceType(format!("{:?}", other))),
    }
}

fn resource_type<R: Resource, A: DeserializeOwned>(
    description: &'static str,
    discriminator: Option<(&'static str, &'static str)>,
) -> Result<ResourceType> {
    let (args_name, format) = args_format::<A>()?;
    Ok(ResourceType {
        token: R::TYPE,
        description,
        args_name,
        discriminator,
        format,
    })
}

/// Every resource type this crate provides.
pub fn resource_types() -> Result<ResourceTypes> {
    let types = vec![
        resource_type::<DataSet, DataSetArgs>(
            "A BigQuery dataset: a container of tables and views with shared location, labels and default table expiration.",
            None,
        )?,
        resource_type::<RouterInterface, RouterInterfaceArgs>(
            "An interface on a Cloud Router bound to a VPN tunnel, optionally with a link-local IP range.",
            None,
        )?,
        resource_type::<RemoteStateReference, S3RemoteStateReferenceArgs>(
            "A reference to Terraform remote state stored in S3, exposing the root outputs of that state.",
            Some((
                "backendType",
                RemoteStateBackend::from(S3RemoteStateReferenceArgs::default()).backend_type(),
            )),
        )?,
    ];
    Ok(types.into_iter().map(|t| (t.token, t)).collect())
}

pub fn lookup(types: &ResourceTypes, token: &str) -> Result<ResourceType> {
    types
        .get(token)
        .cloned()
        .ok_or_else(|| Error::UnknownResourceType(token.to_string()))
}

fn quote_type(format: &Format) -> String {
    use Format::*;
    match format {
        TypeName(x) => x.to_string(),
        Unit => "()".into(),
        Bool => "bool".into(),
        I8 => "i8".into(),
        I16 => "i16".into(),
        I32 => "i32".into(),
        I64 => "number".into(),
        U8 => "u8".into(),
        U16 => "u16".into(),
        U32 => "u32".into(),
        U64 => "u64".into(),
        F32 => "f32".into(),
        F64 => "number".into(),
        Str => "string".into(),
        Option(format) => quote_type(format),
        Seq(format) => format!("[{}]", quote_type(format)),
        Map { key, value } => format!("{{{}: {}}}", quote_type(key), quote_type(value)),
        other => format!("{:?}", other),
    }
}

/// Write `ty` as an indented listing: description, the discriminator if any,
/// then one line per field with `?` marking optional fields.
pub fn write_shape(out: &mut dyn Write, ty: &ResourceType) -> Result<()> {
    let mut out = IndentedWriter::new(out, IndentConfig::Space(4));

    let text = textwrap::indent(&textwrap::fill(ty.description, 76), "# ");
    writeln!(out, "{}", text)?;
    writeln!(out, "{} ({}) {{", ty.token, ty.args_name)?;
    out.indent();
    if let Some((tag, value)) = ty.discriminator {
        writeln!(out, "{}: \"{}\",", tag, value)?;
    }
    match &ty.format {
        ContainerFormat::Struct(fields) => {
            for field in fields {
                let marker = match field.value {
                    Format::Option(_) => "?",
                    _ => "",
                };
                writeln!(out, "{}{}: {},", field.name, marker, quote_type(&field.value))?;
            }
        }
        other => writeln!(out, "{:?}", other)?,
    }
    out.unindent();
    writeln!(out, "}}")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_reflection::Named;

    fn field_names(format: &ContainerFormat) -> Vec<&str> {
        match format {
            ContainerFormat::Struct(fields) => fields.iter().map(|f| f.name.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_dataset_args_shape() {
        let (name, format) = args_format::<DataSetArgs>().unwrap();
        assert_eq!(name, "DataSetArgs");
        assert_eq!(
            field_names(&format),
            vec![
                "creationTime",
                "datasetId",
                "defaultTableExpirationMs",
                "description",
                "etag",
                "friendlyName",
                "labels",
                "lastModifiedTime",
                "location",
                "project",
                "selfLink",
            ]
        );
        if let ContainerFormat::Struct(fields) = format {
            assert_eq!(
                fields[1],
                Named {
                    name: "datasetId".to_string(),
                    value: Format::Str
                }
            );
            assert_eq!(
                fields[6].value,
                Format::Option(Box::new(Format::Map {
                    key: Box::new(Format::Str),
                    value: Box::new(Format::Str),
                }))
            );
            assert_eq!(fields[0].value, Format::Option(Box::new(Format::I64)));
        }
    }

    #[test]
    fn test_router_interface_args_shape() {
        let (_, format) = args_format::<RouterInterfaceArgs>().unwrap();
        assert_eq!(
            field_names(&format),
            vec!["ipRange", "_name", "project", "region", "router", "vpnTunnel"]
        );
    }

    #[test]
    fn test_resource_types() {
        let types = resource_types().unwrap();
        let tokens: Vec<_> = types.keys().cloned().collect();
        assert_eq!(
            tokens,
            vec![
                "gcp:bigquery:DataSet",
                "gcp:compute:RouterInterface",
                "terraform:state:RemoteStateReference",
            ]
        );
    }

    #[test]
    fn test_lookup_unknown() {
        let types = resource_types().unwrap();
        let err = lookup(&types, "gcp:storage:Bucket").unwrap_err();
        assert!(matches!(err, Error::UnknownResourceType(t) if t == "gcp:storage:Bucket"));
    }

    #[test]
    fn test_write_shape() {
        let types = resource_types().unwrap();
        let ty = lookup(&types, "gcp:compute:RouterInterface").unwrap();
        let mut out = Vec::new();
        write_shape(&mut out, &ty).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# An interface on a Cloud Router"));
        assert!(text.contains("gcp:compute:RouterInterface (RouterInterfaceArgs) {\n"));
        assert!(text.contains("\n    ipRange?: string,\n"));
        assert!(text.contains("\n    _name: string,\n"));
        assert!(text.contains("\n    vpnTunnel: string,\n"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_write_shape_map_field() {
        let types = resource_types().unwrap();
        let ty = lookup(&types, "gcp:bigquery:DataSet").unwrap();
        let mut out = Vec::new();
        write_shape(&mut out, &ty).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\n    labels?: {string: string},\n"));
        assert!(text.contains("\n    creationTime?: number,\n"));
        assert!(text.contains("\n    datasetId: string,\n"));
    }

    #[test]
    fn test_write_shape_remote_state_discriminator() {
        let types = resource_types().unwrap();
        let ty = lookup(&types, "terraform:state:RemoteStateReference").unwrap();
        assert_eq!(ty.discriminator, Some(("backendType", "s3")));

        let mut out = Vec::new();
        write_shape(&mut out, &ty).unwrap();
        let text = String::from_utf8(out).unwrap();

        // the tag comes first, before the traced fields
        assert!(text.contains(
            "terraform:state:RemoteStateReference (S3RemoteStateReferenceArgs) {\n    backendType: \"s3\",\n    bucket: string,\n"
        ));
        assert!(text.contains("\n    forcePathStyle?: bool,\n"));
    }

    #[test]
    fn test_described_remote_state_properties_decode() {
        let types = resource_types().unwrap();
        let ty = lookup(&types, "terraform:state:RemoteStateReference").unwrap();
        let (tag, value) = ty.discriminator.unwrap();

        let mut properties = serde_json::Map::new();
        properties.insert(tag.to_string(), value.into());
        properties.insert("bucket".to_string(), "acme-tfstate".into());
        properties.insert("key".to_string(), "network/terraform.tfstate".into());

        let backend: RemoteStateBackend =
            serde_json::from_value(serde_json::Value::Object(properties)).unwrap();
        assert_eq!(backend.backend_type(), "s3");
    }
}
