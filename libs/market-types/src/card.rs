use soroban_sdk::contracttype;

/// 256-bit card identifier, carried as two 128-bit limbs.
///
/// Card ids are opaque to the marketplace: they are compared for equality and
/// used as storage-key components, nothing else. The limb encoding matches
/// the wire interface of the card registry, so ids round-trip between the two
/// contracts without re-encoding.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardId {
    /// Least significant 128 bits
    pub low: u128,
    /// Most significant 128 bits
    pub high: u128,
}

impl CardId {
    pub fn new(low: u128, high: u128) -> Self {
        Self { low, high }
    }
}
