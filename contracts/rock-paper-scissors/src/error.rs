use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RpsError {
    /// Zero identifier, non-positive wager, `None` move, mismatched wager,
    /// zero deadline budget, or a reveal that does not open the commitment.
    InvalidArgument = 1,
    /// The caller is not the player this action belongs to.
    Unauthorized = 2,
    NotFound = 3,
    AlreadyExists = 4,
    /// Action attempted out of order, or withdrawal of an empty balance.
    InvalidState = 5,
    AdminNotSet = 6,
    TokenNotSet = 7,
    TimeoutNotConfigured = 8,
    TimeoutNotReached = 9,
    ArithmeticOverflow = 10,
}
