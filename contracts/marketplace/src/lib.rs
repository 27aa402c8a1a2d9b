/*!
 * Fixed-Price Card Marketplace Contract
 *
 * Holders of cards tracked by an external registry list them here at a fixed
 * price; any other account settles the swap atomically against the payment
 * token, with a treasury cut routed to the configured tax address.
 *
 * Business logic:
 * 1. A seller who owns a card and has approved the marketplace as its
 *    transfer operator lists it with `create_offer` (re-listing re-prices)
 * 2. The seller can withdraw the listing with `cancel_offer`
 * 3. Any other account takes it with `accept_offer`, paying the seller the
 *    price net of tax and the treasury the tax, and receiving the card
 * 4. The owner maintains the treasury address and can swap in new code
 *
 * Every entrypoint either commits all of its effects or none of them: a
 * failing payment or registry leg aborts the whole invocation, so no partial
 * settlement is ever observable.
 */

#![no_std]

mod registry;
mod storage;
pub mod types;


use market_types::{is_valid_price, tax, CardId};
use soroban_sdk::{contract, contractimpl, log, token, Address, BytesN, Env};

use registry::RegistryClient;
use types::{Config, Error, Offer, OFFER_ACCEPTED, OFFER_CANCELLED, OFFER_CREATED, OWNER_CHANGED};

#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    /// Install the marketplace configuration. One shot per instance.
    ///
    /// Called by the deployer right after deployment; no signature is
    /// required since the owner is being installed here. The configuration
    /// record survives code upgrades, so a second call keeps failing with
    /// `AlreadyInitialized` even after `upgrade`.
    ///
    /// # Arguments
    /// * `owner` - account allowed to administer the marketplace
    /// * `tax_address` - treasury receiving the fee cut of settlements
    /// * `card_registry` - contract tracking card ownership and approvals
    /// * `payment_token` - token contract offers are priced and settled in
    pub fn initialize(
        env: Env,
        owner: Address,
        tax_address: Address,
        card_registry: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_config(
            &env,
            &Config {
                owner,
                tax_address,
                card_registry,
                payment_token,
            },
        );
        Ok(())
    }

    /// List a card for sale at a fixed price, or re-price a standing offer.
    ///
    /// The seller must currently own the card and must have approved the
    /// marketplace as its transfer operator, so that acceptance can move the
    /// card later without another signature from the seller. Listing the
    /// same card again simply overwrites the price; there is no separate
    /// update entrypoint.
    ///
    /// # Errors
    /// - `NotOwnerOrNotApproved`: the card is unminted, owned by someone
    ///   else, or the marketplace is not its approved operator
    /// - `InvalidPrice`: the price is outside the listable range
    pub fn create_offer(env: Env, seller: Address, card: CardId, price: i128) -> Result<(), Error> {
        seller.require_auth();
        let config = storage::config(&env)?;

        // An unminted id maps to the same error as foreign ownership.
        let registry = RegistryClient::new(&env, &config.card_registry);
        match registry.try_owner_of(&card) {
            Ok(Ok(owner)) if owner == seller => {}
            _ => return Err(Error::NotOwnerOrNotApproved),
        }
        if !registry.is_authorized(&env.current_contract_address(), &card) {
            return Err(Error::NotOwnerOrNotApproved);
        }

        if !is_valid_price(price) {
            log!(&env, "price out of range: {}", price);
            return Err(Error::InvalidPrice);
        }

        storage::put_offer(&env, &card, &Offer { seller: seller.clone(), price });

        env.events().publish((OFFER_CREATED, seller), (card, price));
        Ok(())
    }

    /// Withdraw a standing offer.
    ///
    /// # Errors
    /// - `OfferNotFound`: no live offer exists for the card
    /// - `NotOfferCreator`: the caller is not the seller who listed it
    pub fn cancel_offer(env: Env, seller: Address, card: CardId) -> Result<(), Error> {
        seller.require_auth();

        let offer = storage::offer(&env, &card).ok_or(Error::OfferNotFound)?;
        if offer.seller != seller {
            return Err(Error::NotOfferCreator);
        }

        storage::remove_offer(&env, &card);

        env.events().publish((OFFER_CANCELLED, seller), (card,));
        Ok(())
    }

    /// Settle a standing offer: pay the seller and the treasury, take the card.
    ///
    /// The buyer pays `price - tax(price)` to the seller and `tax(price)` to
    /// the tax address out of their allowance to the marketplace, and the
    /// card moves from the seller to the buyer through the registry. The
    /// offer is gone afterwards; accepting the same card again fails with
    /// `OfferNotFound`.
    ///
    /// Payment and card legs commit or fail as a unit. A short balance or
    /// allowance, or a registry refusal (the seller no longer holds the
    /// card), aborts the invocation with the failing contract's own error.
    ///
    /// # Errors
    /// - `OfferNotFound`: no live offer exists for the card
    /// - `SelfAcceptance`: the buyer is the seller
    pub fn accept_offer(env: Env, buyer: Address, card: CardId) -> Result<(), Error> {
        buyer.require_auth();
        let config = storage::config(&env)?;

        let offer = storage::offer(&env, &card).ok_or(Error::OfferNotFound)?;
        if buyer == offer.seller {
            return Err(Error::SelfAcceptance);
        }

        let fee = tax(offer.price);
        let marketplace = env.current_contract_address();

        let payment = token::Client::new(&env, &config.payment_token);
        payment.transfer_from(&marketplace, &buyer, &offer.seller, &(offer.price - fee));
        if fee > 0 {
            payment.transfer_from(&marketplace, &buyer, &config.tax_address, &fee);
        }

        let registry = RegistryClient::new(&env, &config.card_registry);
        registry.transfer(&marketplace, &offer.seller, &buyer, &card);

        storage::remove_offer(&env, &card);

        env.events().publish((OFFER_ACCEPTED, buyer), (card,));
        Ok(())
    }

    /// Point the fee cut at a new treasury account. Owner only.
    pub fn set_tax_address(env: Env, new_tax_address: Address) -> Result<(), Error> {
        let mut config = storage::config(&env)?;
        config.owner.require_auth();

        config.tax_address = new_tax_address;
        storage::set_config(&env, &config);
        Ok(())
    }

    /// Hand the contract to a new owner. Owner only.
    ///
    /// The new owner must sign as well, so the contract cannot be handed to
    /// an address nobody controls.
    pub fn transfer_ownership(env: Env, new_owner: Address) -> Result<(), Error> {
        let mut config = storage::config(&env)?;
        config.owner.require_auth();
        new_owner.require_auth();

        config.owner = new_owner.clone();
        storage::set_config(&env, &config);

        env.events().publish((OWNER_CHANGED,), new_owner);
        Ok(())
    }

    /// Swap in a new implementation. Owner only.
    ///
    /// Storage stays in place across the swap; in particular the
    /// configuration record keeps guarding against re-initialization. Only a
    /// freshly deployed instance starts with a blank guard.
    ///
    /// # Errors
    /// - `InvalidUpgradeTarget`: the wasm hash is all zeroes
    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let config = storage::config(&env)?;
        config.owner.require_auth();

        if new_wasm_hash == BytesN::from_array(&env, &[0u8; 32]) {
            return Err(Error::InvalidUpgradeTarget);
        }

        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    /// Live offer for a card, if any.
    pub fn offer_for(env: Env, card: CardId) -> Option<Offer> {
        storage::offer(&env, &card)
    }

    /// Treasury account receiving the fee cut.
    pub fn tax_address(env: Env) -> Result<Address, Error> {
        Ok(storage::config(&env)?.tax_address)
    }

    /// Account administering the marketplace.
    pub fn owner(env: Env) -> Result<Address, Error> {
        Ok(storage::config(&env)?.owner)
    }
}
