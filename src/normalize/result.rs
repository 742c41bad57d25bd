use crate::domain::GameResult;

/// Collapse chess.com's per-side result vocabulary into win/loss/draw.
///
/// Order matters: draws first, then wins, and every other value
/// (resigned, timeout, checkmated, abandoned, unknown future codes)
/// counts as a loss.
pub fn normalize_result(raw: Option<&str>) -> GameResult {
    match raw {
        Some("agreed" | "stalemate") => GameResult::Draw,
        Some("win") => GameResult::Win,
        _ => GameResult::Loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_vocabulary() {
        assert_eq!(normalize_result(Some("agreed")), GameResult::Draw);
        assert_eq!(normalize_result(Some("stalemate")), GameResult::Draw);
    }

    #[test]
    fn test_win() {
        assert_eq!(normalize_result(Some("win")), GameResult::Win);
    }

    #[test]
    fn test_everything_else_is_loss() {
        for raw in ["resigned", "timeout", "checkmated", "abandoned", "repetition", "Win", ""] {
            assert_eq!(normalize_result(Some(raw)), GameResult::Loss, "raw result {raw:?}");
        }
        assert_eq!(normalize_result(None), GameResult::Loss);
    }
}
