//! Errors and event identifiers for the card registry.

use soroban_sdk::{contracterror, symbol_short, Symbol};

/// Failure conditions for registry operations.
///
/// Every error aborts the invocation with no state change. Codes are stable
/// across upgrades so clients can match on them.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` was already called on this instance
    AlreadyInitialized = 1,

    /// The instance has no admin installed yet
    NotInitialized = 2,

    /// The card id has never been minted
    CardNotFound = 3,

    /// The card id is already assigned to an owner
    CardAlreadyExists = 4,

    /// The named account does not hold the card
    NotCardOwner = 5,

    /// The spender is neither the owner nor the approved operator
    NotAuthorized = 6,
}

/// Emitted when a card is minted.
/// Topics: (MINTED, to). Data: (card,)
pub const MINTED: Symbol = symbol_short!("mint");

/// Emitted when a transfer operator is approved for a card.
/// Topics: (APPROVED, owner). Data: (operator, card)
pub const APPROVED: Symbol = symbol_short!("approve");

/// Emitted when a card changes hands.
/// Topics: (TRANSFERRED, from). Data: (to, card)
pub const TRANSFERRED: Symbol = symbol_short!("transfer");
