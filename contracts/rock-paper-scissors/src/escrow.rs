//! Token custody and pull-based payouts.
//!
//! Wagers move into the contract when a player starts or joins a game.
//! Resolution only credits balances here; tokens leave through `withdraw`.

use soroban_sdk::{log, token, Address, Env};

use crate::error::RpsError;
use crate::events::EvWithdrawn;
use crate::storage;

/// Pull `amount` tokens from `player` into escrow.
pub(crate) fn deposit(env: &Env, player: &Address, amount: i128) -> Result<(), RpsError> {
    let token_addr = storage::load_token(env)?;
    let token_client = token::Client::new(env, &token_addr);
    token_client.transfer(player, &env.current_contract_address(), &amount);
    Ok(())
}

/// Add to a player's withdrawable balance.
pub(crate) fn credit(env: &Env, player: &Address, amount: i128) -> Result<(), RpsError> {
    let balance = storage::read_balance(env, player)
        .checked_add(amount)
        .ok_or(RpsError::ArithmeticOverflow)?;
    storage::write_balance(env, player, balance);
    Ok(())
}

/// Pay out the caller's whole balance.
///
/// The balance is zeroed before the token transfer, so anything the transfer
/// triggers sees an empty balance for `player`.
pub(crate) fn withdraw(env: &Env, player: &Address) -> Result<i128, RpsError> {
    let amount = storage::read_balance(env, player);
    if amount <= 0 {
        return Err(RpsError::InvalidState);
    }
    let token_addr = storage::load_token(env)?;

    storage::write_balance(env, player, 0);

    let token_client = token::Client::new(env, &token_addr);
    token_client.transfer(&env.current_contract_address(), player, &amount);

    log!(env, "withdrawn", player.clone(), amount);
    EvWithdrawn {
        player: player.clone(),
        amount,
    }
    .publish(env);

    Ok(amount)
}

pub(crate) fn balance_of(env: &Env, player: &Address) -> i128 {
    storage::read_balance(env, player)
}
