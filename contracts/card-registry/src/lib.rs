/*!
 * Card Ownership Registry
 *
 * Tracks which account holds each uniquely identified card and which single
 * operator, if any, the holder has approved to move it. The marketplace
 * contract consumes this interface to check listings and to settle accepted
 * offers; it is granted no special status here beyond an ordinary operator
 * approval.
 */

#![no_std]

pub mod types;


use market_types::CardId;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use types::{Error, APPROVED, MINTED, TRANSFERRED};

#[contract]
pub struct CardRegistry;

/// Storage keys for the registry contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address allowed to mint (instance storage)
    Admin,
    /// Card owner by id (persistent storage)
    Owner(CardId),
    /// Approved transfer operator by id (persistent storage)
    Approval(CardId),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

#[contractimpl]
impl CardRegistry {
    /// Install the admin allowed to mint cards. One shot per instance.
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Assign a brand new card id to `to`.
    ///
    /// # Errors
    /// - `NotInitialized`: no admin installed
    /// - `CardAlreadyExists`: the id is already owned
    pub fn mint(env: Env, to: Address, card: CardId) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;
        admin.require_auth();

        let key = DataKey::Owner(card.clone());
        if env.storage().persistent().has(&key) {
            return Err(Error::CardAlreadyExists);
        }
        env.storage().persistent().set(&key, &to);
        extend_persistent_ttl(&env, &key);

        env.events().publish((MINTED, to), (card,));
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Current owner of the card.
    pub fn owner_of(env: Env, card: CardId) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Owner(card))
            .ok_or(Error::CardNotFound)
    }

    /// Grant `operator` the right to move `card` on the owner's behalf.
    ///
    /// A card carries at most one approval; granting again replaces it, and
    /// any transfer of the card consumes it.
    ///
    /// # Errors
    /// - `CardNotFound`: the id has never been minted
    /// - `NotCardOwner`: `owner` does not hold the card
    pub fn approve(env: Env, owner: Address, operator: Address, card: CardId) -> Result<(), Error> {
        owner.require_auth();

        let holder: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(card.clone()))
            .ok_or(Error::CardNotFound)?;
        if holder != owner {
            return Err(Error::NotCardOwner);
        }

        let key = DataKey::Approval(card.clone());
        env.storage().persistent().set(&key, &operator);
        extend_persistent_ttl(&env, &key);

        env.events().publish((APPROVED, owner), (operator, card));
        Ok(())
    }

    /// Whether `operator` may currently move `card` on the owner's behalf.
    pub fn is_authorized(env: Env, operator: Address, card: CardId) -> bool {
        let approved: Option<Address> = env.storage().persistent().get(&DataKey::Approval(card));
        approved == Some(operator)
    }

    /// Move `card` from `from` to `to`, authorized by `spender`.
    ///
    /// The spender must be the holder or the approved operator. The standing
    /// approval, if any, is consumed by the move.
    ///
    /// # Errors
    /// - `CardNotFound`: the id has never been minted
    /// - `NotCardOwner`: `from` does not hold the card
    /// - `NotAuthorized`: the spender has no right to move the card
    pub fn transfer(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        card: CardId,
    ) -> Result<(), Error> {
        spender.require_auth();

        let owner_key = DataKey::Owner(card.clone());
        let holder: Address = env
            .storage()
            .persistent()
            .get(&owner_key)
            .ok_or(Error::CardNotFound)?;
        if holder != from {
            return Err(Error::NotCardOwner);
        }

        let approved: Option<Address> = env
            .storage()
            .persistent()
            .get(&DataKey::Approval(card.clone()));
        if spender != from && approved != Some(spender) {
            return Err(Error::NotAuthorized);
        }

        env.storage().persistent().set(&owner_key, &to);
        extend_persistent_ttl(&env, &owner_key);
        env.storage().persistent().remove(&DataKey::Approval(card.clone()));

        env.events().publish((TRANSFERRED, from), (to, card));
        Ok(())
    }

    /// Admin address installed at initialization.
    pub fn admin(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }
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
