use soroban_sdk::{contractevent, Address, BytesN};

use crate::types::{Move, Winner};

#[contractevent]
pub struct EvGameCreated {
    #[topic]
    pub player1: Address,
    #[topic]
    pub player2: Address,
    pub price: i128,
}

#[contractevent]
pub struct EvGameJoined {
    #[topic]
    pub player1: Address,
    #[topic]
    pub player2: Address,
    #[topic]
    pub game_hash: BytesN<32>,
    pub move2: Move,
}

#[contractevent]
pub struct EvGameResult {
    #[topic]
    pub player1: Address,
    #[topic]
    pub player2: Address,
    pub move1: Move,
    pub move2: Move,
    #[topic]
    pub game_hash: BytesN<32>,
    pub winner: Winner,
}

/// Emitted when a stalled timed game is closed through the recovery path.
#[contractevent]
pub struct EvGameExpired {
    #[topic]
    pub game_hash: BytesN<32>,
    #[topic]
    pub claimant: Address,
    pub amount: i128,
}

#[contractevent]
pub struct EvWithdrawn {
    #[topic]
    pub player: Address,
    pub amount: i128,
}
