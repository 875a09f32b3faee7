use crate::prelude::*;

const SUI_MAINNET_URL: &str = "https://fullnode.mainnet.sui.io:443";
const SUI_TESTNET_URL: &str = "https://fullnode.testnet.sui.io:443";
const SUI_DEVNET_URL: &str = "https://fullnode.devnet.sui.io:443";
const SUI_LOCALNET_URL: &str = "http://127.0.0.1:9000";

/// Environment variable consulted by [`read_rpc_url`].
pub const SUI_RPC_URL_ENV: &str = "SUI_RPC_URL";

/// Well known Sui networks and their public full node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IsVariant, derive_more::Display)]
pub enum Network {
    #[display("mainnet")]
    Mainnet,
    #[display("testnet")]
    Testnet,
    #[default]
    #[display("devnet")]
    Devnet,
    #[display("localnet")]
    Localnet,
}

impl Network {
    pub fn rpc_url(&self) -> &'static str {
        match self {
            Self::Mainnet => SUI_MAINNET_URL,
            Self::Testnet => SUI_TESTNET_URL,
            Self::Devnet => SUI_DEVNET_URL,
            Self::Localnet => SUI_LOCALNET_URL,
        }
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "devnet" => Ok(Self::Devnet),
            "localnet" | "local" => Ok(Self::Localnet),
            _ => Err(Error::UnknownNetwork {
                bad_value: s.to_owned(),
            }),
        }
    }
}

/// Where to send requests, requires an `rpc_url`.
#[derive(Debug, Clone, Builder, Getters)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ClientConfig {
    /// Full node JSON-RPC endpoint,
    /// e.g. "https://fullnode.devnet.sui.io:443"
    #[getset(get = "pub")]
    rpc_url: String,
}

impl ClientConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        match &self.rpc_url {
            Some(url) if !is_http_url(url) => Err(format!(
                "rpc_url must start with http:// or https://, got `{}`",
                url
            )),
            _ => Ok(()),
        }
    }
}

impl ClientConfig {
    /// Config pointing at the public full node of `network`.
    pub fn for_network(network: Network) -> Self {
        Self {
            rpc_url: network.rpc_url().to_owned(),
        }
    }

    /// Config pointing at `rpc_url`.
    ///
    /// # Throws
    /// Throws [`Error::InvalidRpcUrl`] unless the url is http(s).
    pub fn with_url(rpc_url: impl AsRef<str>) -> Result<Self> {
        let rpc_url = rpc_url.as_ref().trim();
        if !is_http_url(rpc_url) {
            return Err(Error::InvalidRpcUrl {
                bad_value: rpc_url.to_owned(),
            });
        }
        Ok(Self {
            rpc_url: rpc_url.to_owned(),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Tries to read the full node url from the environment variable `SUI_RPC_URL`.
///
/// Returns `None` if the variable is unset or empty.
pub fn read_rpc_url() -> Option<String> {
    std::env::var(SUI_RPC_URL_ENV)
        .ok()
        .map(|url| url.trim().to_owned())
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn network_from_str() {
        assert_eq!("Mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("local".parse::<Network>().unwrap(), Network::Localnet);
        assert!("moonnet".parse::<Network>().unwrap_err().is_unknown_network());
    }

    #[test]
    fn default_is_devnet() {
        assert_eq!(
            ClientConfig::default().rpc_url(),
            "https://fullnode.devnet.sui.io:443"
        );
    }

    #[test]
    fn with_url_rejects_non_http() {
        let res = ClientConfig::with_url("ws://127.0.0.1:9000");
        assert_eq!(
            res.unwrap_err(),
            Error::InvalidRpcUrl {
                bad_value: "ws://127.0.0.1:9000".to_owned()
            }
        );
    }

    #[test]
    fn builder_validates_url() {
        assert!(
            ClientConfigBuilder::default()
                .rpc_url("ftp://node")
                .build()
                .is_err()
        );
        let config = ClientConfigBuilder::default()
            .rpc_url("http://127.0.0.1:9000")
            .build()
            .unwrap();
        assert_eq!(config.rpc_url(), "http://127.0.0.1:9000");
    }
}
