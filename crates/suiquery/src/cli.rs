pub use clap::Parser;
pub use suibuilder::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "suiquery", version)]
#[command(
    about = "Sui JSON-RPC query tool",
    long_about = "Builds requests for the Sui full node JSON-RPC API from the builder catalog, prints them or sends them to a node."
)]
pub struct Cli {
    /// Full node JSON-RPC url, takes precedence over `SUI_RPC_URL` and `--network`.
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// One of mainnet, testnet, devnet, localnet.
    #[arg(short = 'n', long = "network", default_value = "devnet")]
    pub network: Network,

    /// Print the JSON-RPC request instead of sending it.
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,

    /// List every builder with its method and parameters.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Builder name, e.g. `GetObject`, case insensitive.
    #[arg(required_unless_present = "list")]
    pub builder: Option<String>,

    /// Builder arguments, `name=value` by name or `value` by position.
    /// Values are read as JSON when they parse, else as strings, e.g.
    /// `object_id=0x5 options={"showBcs":false}`.
    pub args: Vec<String>,
}

impl TryFrom<&Cli> for ClientConfig {
    type Error = Error;
    fn try_from(args: &Cli) -> Result<Self> {
        match args.url.clone().or_else(read_rpc_url) {
            Some(url) => ClientConfig::with_url(url),
            None => Ok(ClientConfig::for_network(args.network)),
        }
    }
}

/// Splits command line arguments into named (`name=value`) and positional
/// ones.
pub fn parse_arguments(raw: &[String]) -> Arguments {
    raw.iter()
        .fold(Arguments::new(), |arguments, arg| match arg.split_once('=') {
            Some((name, value)) if is_parameter_name(name) => {
                arguments.with(name, parse_value(value))
            }
            _ => arguments.push(parse_value(arg)),
        })
}

fn is_parameter_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_value(s: &str) -> Value {
    serde_json::from_str(s).unwrap_or_else(|_| Value::String(s.to_owned()))
}
