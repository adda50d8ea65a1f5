use soroban_sdk::{contracttype, Address, BytesN};

/// A player's move. `None` marks a move that has not been played yet and is
/// never accepted as input.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Move {
    None = 0,
    Rock = 1,
    Paper = 2,
    Scissors = 3,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Winner {
    Tie = 0,
    Player1 = 1,
    Player2 = 2,
}

/// Lifecycle of a game record. An absent record is the implicit empty state;
/// `Resolved` and `Expired` are terminal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum GameStatus {
    Created = 1,
    Joined = 2,
    Resolved = 3,
    Expired = 4,
}

/// Ledger budgets for timed games.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deadlines {
    /// Ledgers player 1 has to reveal, counted from the join.
    pub player1_max_block: u32,
    /// Ledgers player 2 has to join, counted from creation.
    pub player2_max_block: u32,
}

/// Whether a game runs against ledger deadlines.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Timing {
    Untimed,
    Timed(Deadlines),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub price: i128,
    pub player1: Address,
    pub player2: Address,
    // Equals the game hash itself for timed games
    pub move1_hash: BytesN<32>,
    pub move1: Move,
    pub move2: Move,
    pub status: GameStatus,
    pub created_ledger: u32,
    // 0 until joined
    pub joined_ledger: u32,
    pub timing: Timing,
}

#[contracttype]
#[derive(Clone)]
pub(crate) enum StorageKey {
    Admin,
    Token,
    Game(BytesN<32>),
    Balance(Address),
}
