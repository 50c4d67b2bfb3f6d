use std::path::{Path, PathBuf};

use sanctuary_stats_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Smart-Contract-Sanctuary - STATS 📊";
pub const DEFAULT_SOURCE_EXTENSION: &str = "sol";
pub const DEFAULT_LOG_FILE_NAME: &str = "contracts.json";

/// One aggregation scope: a named directory holding source units and a log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTarget {
    pub name: String,
    pub path: PathBuf,
}

impl GroupTarget {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// A top-level network and its groups, in report order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkTarget {
    pub name: String,
    pub groups: Vec<GroupTarget>,
}

impl NetworkTarget {
    pub fn new(name: impl Into<String>, groups: Vec<GroupTarget>) -> Self {
        Self { name: name.into(), groups }
    }
}

/// Everything the report run needs to know, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPlan {
    pub title: String,
    pub source_extension: String,
    pub log_file_name: String,
    pub utc: bool,
    pub networks: Vec<NetworkTarget>,
}

impl Default for ReportPlan {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            log_file_name: DEFAULT_LOG_FILE_NAME.to_string(),
            utc: false,
            networks: Vec::new(),
        }
    }
}

impl ReportPlan {
    /// The sanctuary repository layout, relative to the repository root.
    pub fn sanctuary() -> Self {
        let network = |name: &str, dir: &str, groups: &[(&str, &str)]| {
            NetworkTarget::new(
                name,
                groups.iter().map(|(group, sub)| GroupTarget::new(*group, Path::new(dir).join(sub))).collect(),
            )
        };
        Self {
            networks: vec![
                network(
                    "Ethereum",
                    "contracts",
                    &[
                        ("Mainnet", "mainnet"),
                        ("Ropsten", "ropsten"),
                        ("Goerli", "goerli"),
                        ("Kovan", "kovan"),
                        ("Rinkeby", "rinkeby"),
                    ],
                ),
                network("Binance Chain", "contracts_bscscan", &[("Mainnet", "mainnet"), ("Testnet", "testnet")]),
                network("Polygon Matic", "contracts_polygonscan", &[("Mainnet", "mainnet"), ("Mumbai", "mumbai")]),
                network("Tron", "contracts_tronscan", &[("Mainnet", "mainnet")]),
            ],
            ..Self::default()
        }
    }

    /// Resolve relative group paths against `root`.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        for group in self.networks.iter_mut().flat_map(|n| n.groups.iter_mut()) {
            if group.path.is_relative() {
                group.path = root.join(&group.path);
            }
        }
        self
    }

    /// Keep only the named networks (case-insensitive), preserving plan order.
    pub fn only_networks(mut self, names: &[String]) -> DomainResult<Self> {
        if names.is_empty() {
            return Ok(self);
        }
        if let Some(unknown) =
            names.iter().find(|wanted| !self.networks.iter().any(|n| n.name.eq_ignore_ascii_case(wanted)))
        {
            return Err(invalid(format!("unknown network '{unknown}'")));
        }
        self.networks.retain(|n| names.iter().any(|wanted| n.name.eq_ignore_ascii_case(wanted)));
        Ok(self)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.source_extension.trim_start_matches('.').is_empty() {
            return Err(invalid("source extension must not be empty"));
        }
        if self.log_file_name.is_empty() {
            return Err(invalid("log file name must not be empty"));
        }
        if self.networks.is_empty() {
            return Err(invalid("at least one network is required"));
        }
        if let Some(network) = self.networks.iter().find(|n| n.groups.is_empty()) {
            return Err(invalid(format!("network '{}' has no groups", network.name)));
        }
        Ok(())
    }

    /// Extension without a leading dot, as matched against file names.
    pub fn extension(&self) -> &str {
        self.source_extension.trim_start_matches('.')
    }
}

fn invalid(reason: impl Into<String>) -> DomainError {
    DomainError::InvalidConfiguration { reason: reason.into() }
}
