//! Outcome rules: Rock beats Scissors, Scissors beats Paper, Paper beats Rock.

use crate::types::{Move, Winner};

/// Decide a round. Returns `None` if either side has not played.
pub fn resolve(move1: Move, move2: Move) -> Option<Winner> {
    if move1 == Move::None || move2 == Move::None {
        return None;
    }
    if move1 == move2 {
        return Some(Winner::Tie);
    }
    if beats(move1) == move2 {
        Some(Winner::Player1)
    } else {
        Some(Winner::Player2)
    }
}

/// The move that `mv` defeats.
fn beats(mv: Move) -> Move {
    match mv {
        Move::Rock => Move::Scissors,
        Move::Scissors => Move::Paper,
        Move::Paper => Move::Rock,
        Move::None => Move::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    fn swap(winner: Winner) -> Winner {
        match winner {
            Winner::Player1 => Winner::Player2,
            Winner::Player2 => Winner::Player1,
            Winner::Tie => Winner::Tie,
        }
    }

    #[test]
    fn test_identical_moves_tie() {
        for m in MOVES {
            assert_eq!(resolve(m, m), Some(Winner::Tie));
        }
    }

    #[test]
    fn test_known_outcomes() {
        assert_eq!(resolve(Move::Rock, Move::Scissors), Some(Winner::Player1));
        assert_eq!(resolve(Move::Scissors, Move::Rock), Some(Winner::Player2));
        assert_eq!(resolve(Move::Paper, Move::Rock), Some(Winner::Player1));
        assert_eq!(resolve(Move::Scissors, Move::Paper), Some(Winner::Player1));
        assert_eq!(resolve(Move::Paper, Move::Scissors), Some(Winner::Player2));
    }

    #[test]
    fn test_swapping_players_swaps_winner() {
        for a in MOVES {
            for b in MOVES {
                let forward = resolve(a, b).unwrap();
                let backward = resolve(b, a).unwrap();
                assert_eq!(forward, swap(backward), "{:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_each_move_wins_exactly_once() {
        for a in MOVES {
            let wins = MOVES
                .iter()
                .filter(|b| resolve(a, **b) == Some(Winner::Player1))
                .count();
            assert_eq!(wins, 1);
        }
    }

    #[test]
    fn test_unplayed_move_does_not_resolve() {
        assert_eq!(resolve(Move::None, Move::Rock), None);
        assert_eq!(resolve(Move::Paper, Move::None), None);
        assert_eq!(resolve(Move::None, Move::None), None);
    }
}
