use super::moves::SideMoves;
use crate::domain::{RawGame, Side};
use crate::errors::NormalizeError;

/// The target player's view of one game
#[derive(Debug, Clone, PartialEq)]
pub struct Perspective<'a> {
    pub side: Side,
    pub rating: Option<i64>,
    pub raw_result: Option<&'a str>,
    pub accuracy: Option<f64>,
    pub moves: &'a [String],
}

/// Pick the side played by `username`.
///
/// A side only qualifies if it also has at least one parsed move, so a
/// record whose movetext failed to tokenize is rejected instead of
/// yielding an empty move list.
pub fn resolve_perspective<'a>(
    game: &'a RawGame,
    moves: &'a SideMoves,
    username: &str,
) -> Result<Perspective<'a>, NormalizeError> {
    [Side::White, Side::Black]
        .into_iter()
        .find(|side| game.side(*side).username == username && !moves.for_side(*side).is_empty())
        .map(|side| build_perspective(game, moves, side))
        .ok_or_else(|| NormalizeError::UnresolvedPerspective {
            username: username.to_string(),
        })
}

fn build_perspective<'a>(game: &'a RawGame, moves: &'a SideMoves, side: Side) -> Perspective<'a> {
    let player = game.side(side);
    Perspective {
        side,
        rating: player.rating,
        raw_result: player.result.as_deref(),
        accuracy: game.accuracy(side),
        moves: moves.for_side(side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Accuracies, RawSide};

    fn side(username: &str, rating: i64, result: &str) -> RawSide {
        RawSide {
            username: username.to_string(),
            rating: Some(rating),
            result: Some(result.to_string()),
        }
    }

    fn game(accuracies: Option<Accuracies>) -> RawGame {
        RawGame {
            white: side("alice", 1510, "win"),
            black: side("bob", 1490, "resigned"),
            accuracies,
            eco: String::new(),
            pgn: String::new(),
            url: None,
            time_class: None,
        }
    }

    fn moves(white: &[&str], black: &[&str]) -> SideMoves {
        SideMoves {
            white: white.iter().map(|m| m.to_string()).collect(),
            black: black.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn test_resolves_white() {
        let game = game(Some(Accuracies {
            white: Some(91.2),
            black: Some(70.4),
        }));
        let moves = moves(&["e4"], &["e5"]);

        let perspective = resolve_perspective(&game, &moves, "alice").unwrap();
        assert_eq!(perspective.side, Side::White);
        assert_eq!(perspective.rating, Some(1510));
        assert_eq!(perspective.raw_result, Some("win"));
        assert_eq!(perspective.accuracy, Some(91.2));
        assert_eq!(perspective.moves, ["e4".to_string()]);
    }

    #[test]
    fn test_resolves_black_without_accuracies() {
        let game = game(None);
        let moves = moves(&["e4", "Nf3"], &["e5"]);

        let perspective = resolve_perspective(&game, &moves, "bob").unwrap();
        assert_eq!(perspective.side, Side::Black);
        assert_eq!(perspective.raw_result, Some("resigned"));
        assert_eq!(perspective.accuracy, None);
    }

    #[test]
    fn test_side_without_moves_is_unresolved() {
        let game = game(None);
        let moves = moves(&["e4"], &[]);

        assert_eq!(
            resolve_perspective(&game, &moves, "bob"),
            Err(NormalizeError::UnresolvedPerspective {
                username: "bob".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_player_is_unresolved() {
        let game = game(None);
        let moves = moves(&["e4"], &["e5"]);
        assert!(resolve_perspective(&game, &moves, "carol").is_err());
    }
}
