use std::collections::BTreeMap as Map;
use tfbridge_resources::config::StackConfig;
use tfbridge_resources::gcp::bigquery::{DataSet, DataSetArgs};
use tfbridge_resources::gcp::compute::{RouterInterface, RouterInterfaceArgs};
use tfbridge_resources::resource::{Resource, Stack};
use tfbridge_resources::terraform::state::{
    RemoteStateReference, S3RemoteStateReferenceArgs, TerraformState,
};

const NETWORK_STATE: &str = r#"{
    "version": 4,
    "outputs": {
        "router": { "value": "edge-router", "type": "string" },
        "tunnel": { "value": "tunnel-1", "type": "string" }
    }
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut stack = Stack::new(StackConfig::new("acme".to_owned()).with_stack("staging".to_owned()));

    let state = TerraformState::from_reader(NETWORK_STATE.as_bytes())?;
    let network = RemoteStateReference::new(
        "network",
        S3RemoteStateReferenceArgs::new("acme-tfstate", "network/terraform.tfstate"),
    )
    .with_state(&state);
    stack.register(&network)?;

    let output = |name: &str| {
        network
            .get_output(name)
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .unwrap_or_default()
    };
    let interface = RouterInterface::new(
        "edge-if",
        RouterInterfaceArgs {
            name: "if-tunnel-1".to_owned(),
            router: output("router"),
            vpn_tunnel: output("tunnel"),
            region: Some("europe-west1".to_owned()),
            ..Default::default()
        },
    );
    stack.register(&interface)?;

    let mut labels = Map::new();
    labels.insert("env".to_owned(), "staging".to_owned());
    let dataset = DataSet::new(
        "events",
        DataSetArgs {
            dataset_id: "events_raw".to_owned(),
            labels: Some(labels),
            ..Default::default()
        },
    );
    stack.register(&dataset)?;

    assert_eq!(interface.router(), "edge-router");
    assert_eq!(dataset.name(), "events");
    assert_eq!(dataset.location(), None);

    for reg in stack.registrations() {
        println!("{}", reg.urn);
    }
    print!("success!\n");
    Ok(())
}
