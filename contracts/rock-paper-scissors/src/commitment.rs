//! Commitments that hide player 1's move until the reveal.
//!
//! `move_commitment = keccak256("RPS_MOVE_V1" || player || move_u32_be || secret)`
//! `pairing_commitment = keccak256("RPS_GAME_V1" || player1 || player2)`
//!
//! Addresses enter the preimage as their strkey string bytes.

use soroban_sdk::{Address, Bytes, BytesN, Env};

use crate::types::Move;

const MOVE_DOMAIN: &[u8] = b"RPS_MOVE_V1";
const GAME_DOMAIN: &[u8] = b"RPS_GAME_V1";

pub fn move_commitment(env: &Env, player: &Address, mv: Move, secret: &Bytes) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, MOVE_DOMAIN);
    preimage.append(&player.to_string().to_bytes());
    preimage.append(&Bytes::from_array(env, &(mv as u32).to_be_bytes()));
    preimage.append(secret);
    env.crypto().keccak256(&preimage).into()
}

/// Game identifier player 1 can compute before player 2 has done anything.
pub fn pairing_commitment(env: &Env, player1: &Address, player2: &Address) -> BytesN<32> {
    let mut preimage = Bytes::from_slice(env, GAME_DOMAIN);
    preimage.append(&player1.to_string().to_bytes());
    preimage.append(&player2.to_string().to_bytes());
    env.crypto().keccak256(&preimage).into()
}

/// Check a reveal against a stored commitment.
pub fn opens(
    env: &Env,
    commitment: &BytesN<32>,
    player: &Address,
    mv: Move,
    secret: &Bytes,
) -> bool {
    move_commitment(env, player, mv, secret) == *commitment
}

pub fn is_zero(hash: &BytesN<32>) -> bool {
    hash.to_array() == [0u8; 32]
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_move_commitment_is_deterministic() {
        let env = Env::default();
        let alice = Address::generate(&env);
        let secret = Bytes::from_slice(&env, b"aliceSecret");

        let a = move_commitment(&env, &alice, Move::Rock, &secret);
        let b = move_commitment(&env, &alice, Move::Rock, &secret);
        assert_eq!(a, b);
        assert!(!is_zero(&a));
    }

    #[test]
    fn test_move_commitment_binds_every_input() {
        let env = Env::default();
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        let secret = Bytes::from_slice(&env, b"aliceSecret");
        let other_secret = Bytes::from_slice(&env, b"aliceSecret2");

        let base = move_commitment(&env, &alice, Move::Rock, &secret);
        assert_ne!(base, move_commitment(&env, &bob, Move::Rock, &secret));
        assert_ne!(base, move_commitment(&env, &alice, Move::Paper, &secret));
        assert_ne!(base, move_commitment(&env, &alice, Move::Scissors, &secret));
        assert_ne!(base, move_commitment(&env, &alice, Move::Rock, &other_secret));
    }

    #[test]
    fn test_opens_only_the_committed_move() {
        let env = Env::default();
        let alice = Address::generate(&env);
        let secret = Bytes::from_slice(&env, b"aliceSecret");
        let commitment = move_commitment(&env, &alice, Move::Paper, &secret);

        assert!(opens(&env, &commitment, &alice, Move::Paper, &secret));
        assert!(!opens(&env, &commitment, &alice, Move::Rock, &secret));
        assert!(!opens(
            &env,
            &commitment,
            &alice,
            Move::Paper,
            &Bytes::from_slice(&env, b"guess")
        ));
    }

    #[test]
    fn test_pairing_commitment_is_ordered() {
        let env = Env::default();
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        let ab = pairing_commitment(&env, &alice, &bob);
        assert_eq!(ab, pairing_commitment(&env, &alice, &bob));
        assert_ne!(ab, pairing_commitment(&env, &bob, &alice));
    }

    #[test]
    fn test_is_zero() {
        let env = Env::default();
        assert!(is_zero(&BytesN::from_array(&env, &[0u8; 32])));
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!is_zero(&BytesN::from_array(&env, &bytes)));
    }
}
