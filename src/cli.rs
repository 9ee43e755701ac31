//! # Resource declaration previewer
//!
//! '''bash
//! cargo run --bin tfresources -- --help
//! '''

use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;
use tfbridge_resources::config::StackConfig;
use tfbridge_resources::declare::read_declarations_from_file;
use tfbridge_resources::resource::Stack;
use tfbridge_resources::schema::{lookup, resource_types, write_shape};
use tfbridge_resources::terraform::state::TerraformState;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Terraform-bridged resource tool",
    about = "Inspect resource types and preview resource declarations"
)]
struct Options {
    /// Log debug output to stderr.
    #[structopt(short, long)]
    verbose: bool,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// List the known resource types.
    Types,
    /// Print the argument shape of a resource type.
    Describe {
        /// Type token, e.g. `gcp:bigquery:DataSet`.
        token: String,
    },
    /// Register the resources declared in a JSON document and print the registrations.
    Preview {
        /// Path to the JSON-encoded declarations.
        #[structopt(parse(from_os_str))]
        input: PathBuf,
        #[structopt(long, default_value = "default")]
        project: String,
        #[structopt(long, default_value = "dev")]
        stack: String,
        /// Attach outputs of a local state file to a remote state reference, as `NAME=PATH`.
        #[structopt(long = "state", parse(try_from_str = parse_state_arg))]
        states: Vec<(String, PathBuf)>,
    },
}

fn parse_state_arg(arg: &str) -> Result<(String, PathBuf), String> {
    match arg.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got `{}`", arg)),
    }
}

fn init_logger(verbose: bool) {
    let default = if verbose {
        "tfbridge_resources=debug,tfresources=debug"
    } else {
        "tfbridge_resources=info,tfresources=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = Options::from_args();
    init_logger(options.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match options.command {
        Command::Types => {
            for (token, ty) in resource_types()? {
                writeln!(out, "{:<40} {}", token, ty.description)?;
            }
        }
        Command::Describe { token } => {
            let types = resource_types()?;
            write_shape(&mut out, &lookup(&types, &token)?)?;
        }
        Command::Preview {
            input,
            project,
            stack,
            states,
        } => {
            let declarations = read_declarations_from_file(&input)?;
            let mut loaded = BTreeMap::new();
            for (name, path) in states {
                loaded.insert(name, TerraformState::from_file(&path)?);
            }

            let mut stack = Stack::new(StackConfig::new(project).with_stack(stack));
            declarations.declare_with_states(&mut stack, &loaded)?;
            info!(
                project = stack.config().project(),
                stack = stack.config().stack(),
                "preview complete"
            );
            serde_json::to_writer_pretty(&mut out, stack.registrations())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
