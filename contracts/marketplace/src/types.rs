//! Data structures, errors, and event identifiers for the marketplace.

use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

/// A seller's standing commitment to sell one card at a fixed price.
///
/// The card id is the storage key, so the record only carries the seller and
/// the price. Re-listing the same card overwrites the record in place; there
/// is never more than one live offer per card.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Offer {
    /// Account that listed the card and receives the net proceeds
    pub seller: Address,

    /// Asking price in the payment token's smallest unit
    pub price: i128,
}

/// Singleton marketplace configuration, written once by `initialize`.
///
/// Its presence in instance storage doubles as the initialization latch: the
/// record exists exactly when the instance has been initialized, and it
/// survives code upgrades.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Account allowed to change the tax address and upgrade the contract
    pub owner: Address,

    /// Treasury account receiving the fee cut of every settlement
    pub tax_address: Address,

    /// Card ownership registry the engine checks and settles against
    pub card_registry: Address,

    /// Token contract used to pay for accepted offers
    pub payment_token: Address,
}

/// Failure conditions for marketplace operations.
///
/// Every error aborts the invocation with no state change. Failures inside
/// the payment token or the card registry are not reinterpreted; they abort
/// the invocation as host errors of the failing contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` was already called on this instance
    AlreadyInitialized = 1,

    /// The instance has no configuration record yet
    NotInitialized = 2,

    /// The asking price is outside the listable range
    InvalidPrice = 3,

    /// The caller does not own the card, or the marketplace is not its
    /// approved transfer operator
    NotOwnerOrNotApproved = 4,

    /// No live offer exists for the card
    OfferNotFound = 5,

    /// The caller is not the seller who listed the card
    NotOfferCreator = 6,

    /// A seller cannot accept their own offer
    SelfAcceptance = 7,

    /// The upgrade target hash is null
    InvalidUpgradeTarget = 8,
}

// Event identifiers. Topics carry the acting account; data carries the card
// and, where relevant, the price.

/// Emitted when an offer is created or re-priced.
/// Topics: (OFFER_CREATED, seller). Data: (card, price)
pub const OFFER_CREATED: Symbol = symbol_short!("off_crtd");

/// Emitted when a seller withdraws their offer.
/// Topics: (OFFER_CANCELLED, seller). Data: (card,)
pub const OFFER_CANCELLED: Symbol = symbol_short!("off_cncl");

/// Emitted when a buyer settles an offer.
/// Topics: (OFFER_ACCEPTED, buyer). Data: (card,)
pub const OFFER_ACCEPTED: Symbol = symbol_short!("off_acpt");

/// Emitted when the owner hands the contract to a new owner.
/// Topics: (OWNER_CHANGED,). Data: new owner
pub const OWNER_CHANGED: Symbol = symbol_short!("own_chngd");
