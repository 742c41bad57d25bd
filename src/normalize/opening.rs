use super::moves::SideMoves;

// Length of "https://www.chess.com/openings/"
const ECO_URL_PREFIX_LEN: usize = 31;

const NO_MOVES: &str = "No moves available";

/// Readable opening family from a chess.com opening URL.
///
/// `https://www.chess.com/openings/Sicilian-Defense-Open-2...Nc6`
/// becomes `Sicilian Defense Open`.
pub fn opening_family(eco: &str) -> String {
    let family: String = eco
        .chars()
        .skip(ECO_URL_PREFIX_LEN)
        .map(|c| if c == '-' { ' ' } else { c })
        .take_while(|c| c.is_alphabetic() || *c == ' ')
        .collect();
    family.trim().to_string()
}

/// Notated first two moves, or `None` when no rule applies (w >= 2, b == 1)
pub fn opening_excerpt(white: &[String], black: &[String]) -> Option<String> {
    match (white.len(), black.len()) {
        (w, b) if w >= 2 && b >= 2 => Some(format!(
            "1.{} {} 2.{} {}",
            white[0], black[0], white[1], black[1]
        )),
        (1, b) if b >= 1 => Some(format!("1.{} {}", white[0], black[0])),
        (w, 0) if w >= 1 => Some(format!("1.{}", white[0])),
        (0, b) if b >= 1 => Some(format!("1...{}", black[0])),
        (0, 0) => Some(NO_MOVES.to_string()),
        _ => None,
    }
}

pub fn build_opening_signature(eco: &str, moves: &SideMoves) -> String {
    let family = opening_family(eco);
    match opening_excerpt(&moves.white, &moves.black) {
        Some(excerpt) if family.is_empty() => excerpt,
        Some(excerpt) => format!("{} {}", family, excerpt),
        None => family,
    }
}
