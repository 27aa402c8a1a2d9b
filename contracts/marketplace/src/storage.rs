//! Ledger storage layout and accessors.
//!
//! The configuration record lives in instance storage so it shares the
//! contract instance's lifetime and survives code upgrades. Offers live in
//! persistent storage under their card id, one entry per card; removing the
//! entry is what ends an offer's life.

use market_types::CardId;
use soroban_sdk::{contracttype, Env};

use crate::types::{Config, Error, Offer};

/// Storage keys for the marketplace contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Marketplace configuration (instance storage)
    Config,
    /// Live offer for a card (persistent storage)
    Offer(CardId),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn config(env: &Env) -> Result<Config, Error> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

pub fn offer(env: &Env, card: &CardId) -> Option<Offer> {
    env.storage().persistent().get(&DataKey::Offer(card.clone()))
}

pub fn put_offer(env: &Env, card: &CardId, offer: &Offer) {
    let key = DataKey::Offer(card.clone());
    env.storage().persistent().set(&key, offer);
    extend_persistent_ttl(env, &key);
}

pub fn remove_offer(env: &Env, card: &CardId) {
    env.storage().persistent().remove(&DataKey::Offer(card.clone()));
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}
