//! Client interface for the external card registry.
//!
//! The marketplace depends only on the entrypoint shapes below; any contract
//! exporting them can back a deployment. Calls resolve the registry address
//! from the configuration at call time.

use market_types::CardId;
use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "RegistryClient")]
pub trait CardRegistryInterface {
    /// Current owner of the card. Fails for an unminted id.
    fn owner_of(env: Env, card: CardId) -> Address;

    /// Whether `operator` may move the card on the owner's behalf.
    fn is_authorized(env: Env, operator: Address, card: CardId) -> bool;

    /// Move the card, authorized by `spender` (owner or approved operator).
    fn transfer(env: Env, spender: Address, from: Address, to: Address, card: CardId);
}
