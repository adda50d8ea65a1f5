#![no_std]

//! # Rock Paper Scissors
//!
//! A two-player wagering game using commit-reveal so that neither player sees
//! the other's move before their own is locked in.
//!
//! ## Game flow
//! 1. Player 1 computes `game_hash(player1, player2)` and
//!    `move_hash(player1, move, secret)`, then calls `start_game` with the
//!    wager. The move stays hidden.
//! 2. Player 2 calls `join_game` with a plaintext move and the same wager.
//! 3. Player 1 calls `game_result` with the move and secret. The contract
//!    re-derives the commitment, resolves the round and credits balances:
//!    the winner gets both wagers, a tie refunds each player.
//! 4. Either player calls `withdraw` to collect.
//!
//! ## Timed games
//! `start_timed_game` uses the move commitment itself as the game hash and
//! records ledger budgets for joining and revealing. A player left waiting
//! past a deadline can close the game with `claim_timeout`.
//!
//! ## Encoding
//! Moves: `None = 0, Rock = 1, Paper = 2, Scissors = 3`.
//! Winner: `Tie = 0, Player1 = 1, Player2 = 2`.

mod commitment;
mod error;
mod escrow;
mod events;
mod rules;
mod storage;
mod timeout;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Bytes, BytesN, Env};

pub use commitment::{move_commitment, pairing_commitment};
pub use error::RpsError;
pub use events::{EvGameCreated, EvGameExpired, EvGameJoined, EvGameResult, EvWithdrawn};
pub use rules::resolve;
pub use timeout::{join_deadline, reveal_deadline};
pub use types::{Deadlines, Game, GameStatus, Move, Timing, Winner};

#[contract]
pub struct RockPaperScissors;

#[contractimpl]
impl RockPaperScissors {
    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Constructor
    // ───────────────────────────────────────────────────────────────────────────

    /// `token` is the asset wagers are paid in.
    pub fn __constructor(env: Env, admin: Address, token: Address) {
        storage::write_admin(&env, &admin);
        storage::write_token(&env, &token);
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Commitments
    // ───────────────────────────────────────────────────────────────────────────

    /// Commitment to `move1` that player 1 submits when starting a game.
    pub fn move_hash(env: Env, player: Address, move1: Move, secret: Bytes) -> BytesN<32> {
        commitment::move_commitment(&env, &player, move1, &secret)
    }

    /// Identifier for a game between `player1` and `player2`.
    pub fn game_hash(env: Env, player1: Address, player2: Address) -> BytesN<32> {
        commitment::pairing_commitment(&env, &player1, &player2)
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Game lifecycle
    // ───────────────────────────────────────────────────────────────────────────

    pub fn start_game(
        env: Env,
        player1: Address,
        game_hash: BytesN<32>,
        move1_hash: BytesN<32>,
        player2: Address,
        wager: i128,
    ) -> Result<(), RpsError> {
        player1.require_auth();
        Self::open_game(
            &env,
            player1,
            game_hash,
            move1_hash,
            player2,
            wager,
            Timing::Untimed,
        )
    }

    /// Start a game whose identifier is player 1's move commitment, with
    /// ledger budgets for each side to act.
    pub fn start_timed_game(
        env: Env,
        player1: Address,
        game_hash: BytesN<32>,
        player2: Address,
        wager: i128,
        player1_max_block: u32,
        player2_max_block: u32,
    ) -> Result<(), RpsError> {
        player1.require_auth();
        let deadlines = Deadlines {
            player1_max_block,
            player2_max_block,
        };
        timeout::validate(&deadlines)?;
        Self::open_game(
            &env,
            player1,
            game_hash.clone(),
            game_hash,
            player2,
            wager,
            Timing::Timed(deadlines),
        )
    }

    pub fn join_game(
        env: Env,
        player2: Address,
        game_hash: BytesN<32>,
        move2: Move,
        wager: i128,
    ) -> Result<(), RpsError> {
        player2.require_auth();

        let mut game = storage::read_game(&env, &game_hash)?;
        if move2 == Move::None {
            return Err(RpsError::InvalidArgument);
        }
        if player2 != game.player2 {
            return Err(RpsError::Unauthorized);
        }
        if wager != game.price {
            return Err(RpsError::InvalidArgument);
        }
        if game.status != GameStatus::Created || game.move2 != Move::None {
            return Err(RpsError::InvalidState);
        }

        escrow::deposit(&env, &player2, wager)?;

        game.move2 = move2;
        game.joined_ledger = env.ledger().sequence();
        game.status = GameStatus::Joined;
        storage::write_game(&env, &game_hash, &game);

        log!(&env, "game joined", game_hash.clone(), move2 as u32);
        EvGameJoined {
            player1: game.player1,
            player2,
            game_hash,
            move2,
        }
        .publish(&env);

        Ok(())
    }

    /// Reveal player 1's move and settle the game.
    ///
    /// A wrong move and a wrong secret are rejected the same way, so player 1
    /// cannot switch to a different move after seeing player 2's.
    pub fn game_result(
        env: Env,
        player1: Address,
        game_hash: BytesN<32>,
        move1: Move,
        secret: Bytes,
    ) -> Result<Winner, RpsError> {
        player1.require_auth();

        if commitment::is_zero(&game_hash) {
            return Err(RpsError::NotFound);
        }
        let mut game = storage::read_game(&env, &game_hash)?;
        if move1 == Move::None {
            return Err(RpsError::InvalidArgument);
        }
        if player1 != game.player1 {
            return Err(RpsError::Unauthorized);
        }
        if game.move2 == Move::None || game.status != GameStatus::Joined {
            return Err(RpsError::InvalidState);
        }
        if !commitment::opens(&env, &game.move1_hash, &player1, move1, &secret) {
            return Err(RpsError::InvalidArgument);
        }

        let winner = rules::resolve(move1, game.move2).ok_or(RpsError::InvalidState)?;
        let pot = game
            .price
            .checked_mul(2)
            .ok_or(RpsError::ArithmeticOverflow)?;
        match winner {
            Winner::Tie => {
                escrow::credit(&env, &game.player1, game.price)?;
                escrow::credit(&env, &game.player2, game.price)?;
            }
            Winner::Player1 => escrow::credit(&env, &game.player1, pot)?,
            Winner::Player2 => escrow::credit(&env, &game.player2, pot)?,
        }

        game.move1 = move1;
        game.status = GameStatus::Resolved;
        storage::write_game(&env, &game_hash, &game);

        log!(&env, "game resolved", game_hash.clone(), winner as u32);
        EvGameResult {
            player1: game.player1,
            player2: game.player2,
            move1,
            move2: game.move2,
            game_hash,
            winner,
        }
        .publish(&env);

        Ok(winner)
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Timeout & Withdrawal
    // ───────────────────────────────────────────────────────────────────────────

    /// Close a timed game the other player has stalled past its deadline.
    /// Returns the amount credited to the caller.
    pub fn claim_timeout(
        env: Env,
        caller: Address,
        game_hash: BytesN<32>,
    ) -> Result<i128, RpsError> {
        caller.require_auth();
        timeout::claim(&env, &caller, &game_hash)
    }

    /// Transfer the caller's whole balance out of escrow.
    pub fn withdraw(env: Env, player: Address) -> Result<i128, RpsError> {
        player.require_auth();
        escrow::withdraw(&env, &player)
    }

    // ───────────────────────────────────────────────────────────────────────────
    //  Public: Read & Admin
    // ───────────────────────────────────────────────────────────────────────────

    pub fn get_game(env: Env, game_hash: BytesN<32>) -> Result<Game, RpsError> {
        storage::read_game(&env, &game_hash)
    }

    pub fn balance_of(env: Env, player: Address) -> i128 {
        escrow::balance_of(&env, &player)
    }

    pub fn get_token(env: Env) -> Result<Address, RpsError> {
        storage::load_token(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, RpsError> {
        storage::load_admin(&env)
    }

    pub fn set_admin(env: Env, new_admin: Address) -> Result<(), RpsError> {
        let admin = storage::load_admin(&env)?;
        admin.require_auth();
        storage::write_admin(&env, &new_admin);
        Ok(())
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), RpsError> {
        let admin = storage::load_admin(&env)?;
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════════
    //  Internal: Creation (shared by both start variants)
    // ═══════════════════════════════════════════════════════════════════════════

    fn open_game(
        env: &Env,
        player1: Address,
        game_hash: BytesN<32>,
        move1_hash: BytesN<32>,
        player2: Address,
        wager: i128,
        timing: Timing,
    ) -> Result<(), RpsError> {
        if commitment::is_zero(&game_hash) || commitment::is_zero(&move1_hash) {
            return Err(RpsError::InvalidArgument);
        }
        Self::require_counterparty(env, &player1, &player2)?;
        if wager <= 0 {
            return Err(RpsError::InvalidArgument);
        }
        if storage::has_game(env, &game_hash) {
            return Err(RpsError::AlreadyExists);
        }

        escrow::deposit(env, &player1, wager)?;

        let game = Game {
            price: wager,
            player1: player1.clone(),
            player2: player2.clone(),
            move1_hash,
            move1: Move::None,
            move2: Move::None,
            status: GameStatus::Created,
            created_ledger: env.ledger().sequence(),
            joined_ledger: 0,
            timing,
        };
        storage::write_game(env, &game_hash, &game);

        log!(env, "game created", game_hash, wager);
        EvGameCreated {
            player1,
            player2,
            price: wager,
        }
        .publish(env);

        Ok(())
    }

    /// Player 2 must be someone other than player 1 and this contract.
    fn require_counterparty(
        env: &Env,
        player1: &Address,
        player2: &Address,
    ) -> Result<(), RpsError> {
        if player2 == player1 || *player2 == env.current_contract_address() {
            return Err(RpsError::InvalidArgument);
        }
        Ok(())
    }
}
