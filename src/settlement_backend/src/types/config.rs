//! Protocol configuration types

use candid::{CandidType, Deserialize, Principal};

/// Constructor arguments supplied at canister installation
///
/// `supported_assets` and `feed_ids` are parallel lists: index `i` of
/// `feed_ids` is the oracle feed for `supported_assets[i]`. Both must be
/// non-empty and of equal length; installation traps otherwise.
#[derive(CandidType, Deserialize, Clone, Debug)]
pub struct InitArgs {
    pub owner: Principal,
    pub fee_collector: Principal,
    /// Protocol fee rate in basis points (0..=10000)
    pub fee_rate_bps: u16,
    /// Single-call multi-route aggregator venue
    pub aggregator: Principal,
    /// Route-params / per-hop array router venue
    pub router: Principal,
    pub oracle: Principal,
    pub supported_assets: Vec<Principal>,
    pub feed_ids: Vec<String>,
}

/// The configuration singleton held for the lifetime of the canister
///
/// Set once at init. Nothing in the settlement path mutates it; the only
/// post-init change comes through the controller-driven upgrade path.
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub struct ProtocolConfig {
    pub owner: Principal,
    pub fee_collector: Principal,
    pub fee_rate_bps: u16,
    pub aggregator: Principal,
    pub router: Principal,
    pub oracle: Principal,
}

impl ProtocolConfig {
    pub fn from_init(args: &InitArgs) -> Self {
        ProtocolConfig {
            owner: args.owner,
            fee_collector: args.fee_collector,
            fee_rate_bps: args.fee_rate_bps,
            aggregator: args.aggregator,
            router: args.router,
            oracle: args.oracle,
        }
    }
}

/// Read-only configuration snapshot returned by `get_configuration`
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq)]
pub struct ConfigView {
    pub owner: Principal,
    pub fee_collector: Principal,
    pub fee_rate_bps: u16,
    pub aggregator: Principal,
    pub router: Principal,
    pub oracle: Principal,
}

impl From<ProtocolConfig> for ConfigView {
    fn from(c: ProtocolConfig) -> Self {
        ConfigView {
            owner: c.owner,
            fee_collector: c.fee_collector,
            fee_rate_bps: c.fee_rate_bps,
            aggregator: c.aggregator,
            router: c.router,
            oracle: c.oracle,
        }
    }
}
