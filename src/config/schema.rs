//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::poll::PollSettings;

/// Target network. Each variant maps to a fixed base URL; the selection is
/// made once at client construction and never changes afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Public devnet.
    #[default]
    Devnet,
    /// Zeko L2 testnet.
    Zeko,
    /// Local development service.
    Local,
    /// Production network. Not yet enabled; rejected at construction.
    Mainnet,
}

impl Network {
    /// Base URL of the service for this network.
    pub fn base_url(&self) -> &'static str {
        match self {
            Network::Devnet => "https://devnet.zktokens.com/api/v1",
            Network::Zeko => "https://zeko.zktokens.com/api/v1",
            Network::Local => "http://localhost:3000/api/v1",
            Network::Mainnet => "https://zktokens.com/api/v1",
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "devnet" => Ok(Network::Devnet),
            "zeko" => Ok(Network::Zeko),
            "local" => Ok(Network::Local),
            "mainnet" => Ok(Network::Mainnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Devnet => write!(f, "devnet"),
            Network::Zeko => write!(f, "zeko"),
            Network::Local => write!(f, "local"),
            Network::Mainnet => write!(f, "mainnet"),
        }
    }
}

/// Root configuration for the client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key sent with every request (`x-api-key` header).
    pub api_key: String,

    /// Target network.
    pub network: Network,

    /// Overrides the network base URL. Intended for self-hosted
    /// deployments and tests; the network selection still applies for
    /// everything else (mainnet stays rejected).
    pub endpoint_override: Option<String>,

    /// Per-request HTTP timeout, in seconds.
    pub http_timeout_secs: u64,

    /// Poll budget for proving jobs.
    pub job_poll: PollSettings,

    /// Poll budget for transaction inclusion.
    pub inclusion_poll: PollSettings,
}

impl ClientConfig {
    /// Configuration with default budgets for the given key and network.
    pub fn new(api_key: impl Into<String>, network: Network) -> Self {
        Self {
            api_key: api_key.into(),
            network,
            ..Self::default()
        }
    }

    /// The base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.endpoint_override
            .as_deref()
            .unwrap_or_else(|| self.network.base_url())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            network: Network::Devnet,
            endpoint_override: None,
            http_timeout_secs: 30,
            job_poll: PollSettings::proof_jobs(),
            inclusion_poll: PollSettings::inclusion(),
        }
    }
}
