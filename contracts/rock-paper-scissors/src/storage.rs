use soroban_sdk::{Address, BytesN, Env};

use crate::error::RpsError;
use crate::types::{Game, StorageKey};

// Ledger rate is approximately 5 seconds per ledger on Stellar
const LEDGER_RATE_SECS: u32 = 5;

// TTL expressed in human-readable time units (30 days)
const TTL_SECONDS: u32 = 30 * 24 * 60 * 60; // 2,592,000 seconds

/// TTL for games and balances in ledgers: 30 * 24 * 60 * 60 / 5 = 518,400 ledgers
pub(crate) const TTL_LEDGERS: u32 = TTL_SECONDS / LEDGER_RATE_SECS;

pub(crate) fn has_game(env: &Env, game_hash: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Game(game_hash.clone()))
}

pub(crate) fn read_game(env: &Env, game_hash: &BytesN<32>) -> Result<Game, RpsError> {
    env.storage()
        .persistent()
        .get(&StorageKey::Game(game_hash.clone()))
        .ok_or(RpsError::NotFound)
}

pub(crate) fn write_game(env: &Env, game_hash: &BytesN<32>, game: &Game) {
    let key = StorageKey::Game(game_hash.clone());
    env.storage().persistent().set(&key, game);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_LEDGERS, TTL_LEDGERS);
    bump_instance(env);
}

pub(crate) fn read_balance(env: &Env, player: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&StorageKey::Balance(player.clone()))
        .unwrap_or(0)
}

pub(crate) fn write_balance(env: &Env, player: &Address, amount: i128) {
    let key = StorageKey::Balance(player.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_LEDGERS, TTL_LEDGERS);
    bump_instance(env);
}

// Keep instance storage (admin, token) alive alongside the entries it governs
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_LEDGERS, TTL_LEDGERS);
}

pub(crate) fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

pub(crate) fn load_admin(env: &Env) -> Result<Address, RpsError> {
    env.storage()
        .instance()
        .get(&StorageKey::Admin)
        .ok_or(RpsError::AdminNotSet)
}

pub(crate) fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&StorageKey::Token, token);
}

pub(crate) fn load_token(env: &Env) -> Result<Address, RpsError> {
    env.storage()
        .instance()
        .get(&StorageKey::Token)
        .ok_or(RpsError::TokenNotSet)
}
