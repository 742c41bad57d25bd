use crate::domain::Side;

const FIRST_MOVE_MARKER: &str = "1.";

/// Half-moves split by the side that played them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideMoves {
    pub white: Vec<String>,
    pub black: Vec<String>,
}

impl SideMoves {
    pub fn for_side(&self, side: Side) -> &[String] {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }
}

/// Split cleaned movetext into white and black half-moves.
///
/// Everything before the first `1.` token is metadata. Move numbers
/// (`12.`, `12...`) and the trailing result token are dropped; the
/// rest alternates white, black, white, ...
pub fn tokenize_moves(movetext: &str) -> SideMoves {
    let tokens: Vec<&str> = movetext.split_whitespace().collect();

    let Some(start) = tokens.iter().position(|token| *token == FIRST_MOVE_MARKER) else {
        return SideMoves::default();
    };

    let mut half_moves: Vec<&str> = tokens[start..]
        .iter()
        .copied()
        .filter(|token| !token.ends_with('.'))
        .collect();
    half_moves.pop();

    partition_by_side(&half_moves)
}

fn partition_by_side(half_moves: &[&str]) -> SideMoves {
    let mut moves = SideMoves::default();
    for (index, half_move) in half_moves.iter().enumerate() {
        let target = if index % 2 == 0 {
            &mut moves.white
        } else {
            &mut moves.black
        };
        target.push(half_move.to_string());
    }
    moves
}

/// `index`-th move from the start, zero-based
pub fn move_at(moves: &[String], index: usize) -> Option<String> {
    moves.get(index).cloned()
}

/// `n`-th move from the end, one-based (1 is the last move)
pub fn move_from_end(moves: &[String], n: usize) -> Option<String> {
    moves.len().checked_sub(n).and_then(|index| move_at(moves, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tokenize_simple_movetext() {
        let moves = tokenize_moves("1. e4 e5 2. Nf3 Nc6 1-0");
        assert_eq!(moves.white, strings(&["e4", "Nf3"]));
        assert_eq!(moves.black, strings(&["e5", "Nc6"]));
    }

    #[test]
    fn test_tokenize_skips_headers_and_black_move_numbers() {
        let movetext = "[Event \"Live Chess\"] [Result \"0-1\"]  1. e4  1... c5  2. Nf3  2... d6  3. d4 0-1";
        let moves = tokenize_moves(movetext);
        assert_eq!(moves.white, strings(&["e4", "Nf3", "d4"]));
        assert_eq!(moves.black, strings(&["c5", "d6"]));
    }

    #[test]
    fn test_tokenize_without_moves() {
        assert_eq!(tokenize_moves("[Event \"Live Chess\"] 1-0"), SideMoves::default());
    }

    #[test]
    fn test_tokenize_result_only_after_marker() {
        let moves = tokenize_moves("1. 0-1");
        assert!(moves.white.is_empty());
        assert!(moves.black.is_empty());
    }

    #[test]
    fn test_move_excerpts() {
        let moves = strings(&["e4", "Nf3", "Bc4"]);
        assert_eq!(move_at(&moves, 0).as_deref(), Some("e4"));
        assert_eq!(move_at(&moves, 3), None);
        assert_eq!(move_from_end(&moves, 1).as_deref(), Some("Bc4"));
        assert_eq!(move_from_end(&moves, 3).as_deref(), Some("e4"));
        assert_eq!(move_from_end(&moves, 4), None);
        assert_eq!(move_from_end(&moves, 0), None);
    }
}
