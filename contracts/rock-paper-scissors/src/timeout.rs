//! Ledger-sequence deadlines for timed games.
//!
//! Player 2 has `player2_max_block` ledgers after creation to join, player 1
//! has `player1_max_block` ledgers after the join to reveal. Once a deadline
//! has passed, the waiting player may close the game with `claim_timeout`:
//!
//! - never joined: player 1 gets their own wager back
//! - joined but never revealed: player 2 takes the whole pot
//!
//! Deadlines do not close the regular path. Until someone claims, a late join
//! or a late reveal still goes through.

use soroban_sdk::{log, Address, BytesN, Env};

use crate::error::RpsError;
use crate::escrow;
use crate::events::EvGameExpired;
use crate::storage;
use crate::types::{Deadlines, Game, GameStatus, Timing};

pub(crate) fn validate(deadlines: &Deadlines) -> Result<(), RpsError> {
    if deadlines.player1_max_block == 0 || deadlines.player2_max_block == 0 {
        return Err(RpsError::InvalidArgument);
    }
    Ok(())
}

/// Last ledger on which player 2 may join without being exposed to a claim.
pub fn join_deadline(game: &Game) -> Option<u32> {
    match &game.timing {
        Timing::Timed(d) => Some(game.created_ledger.saturating_add(d.player2_max_block)),
        Timing::Untimed => None,
    }
}

/// Last ledger on which player 1 may reveal without being exposed to a claim.
pub fn reveal_deadline(game: &Game) -> Option<u32> {
    match (&game.timing, game.status) {
        (Timing::Timed(d), GameStatus::Joined) => {
            Some(game.joined_ledger.saturating_add(d.player1_max_block))
        }
        _ => None,
    }
}

pub(crate) fn claim(env: &Env, caller: &Address, game_hash: &BytesN<32>) -> Result<i128, RpsError> {
    let mut game = storage::read_game(env, game_hash)?;
    if game.timing == Timing::Untimed {
        return Err(RpsError::TimeoutNotConfigured);
    }

    let (claimant, deadline, amount) = match game.status {
        GameStatus::Created => (
            game.player1.clone(),
            join_deadline(&game),
            game.price,
        ),
        GameStatus::Joined => (
            game.player2.clone(),
            reveal_deadline(&game),
            game.price
                .checked_mul(2)
                .ok_or(RpsError::ArithmeticOverflow)?,
        ),
        GameStatus::Resolved | GameStatus::Expired => return Err(RpsError::InvalidState),
    };

    if *caller != claimant {
        return Err(RpsError::Unauthorized);
    }
    let deadline = deadline.ok_or(RpsError::TimeoutNotConfigured)?;
    if env.ledger().sequence() <= deadline {
        return Err(RpsError::TimeoutNotReached);
    }

    escrow::credit(env, &claimant, amount)?;
    game.status = GameStatus::Expired;
    storage::write_game(env, game_hash, &game);

    log!(env, "game expired", game_hash.clone(), amount);
    EvGameExpired {
        game_hash: game_hash.clone(),
        claimant,
        amount,
    }
    .publish(env);

    Ok(amount)
}
