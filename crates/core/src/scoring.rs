//! Scoring: a flat award per cleared row, multiplied by the rows cleared in one lock.

use crate::types::LINE_CLEAR_SCORE;

/// Score for clearing `rows` rows in a single lock event
pub fn line_clear_score(rows: usize) -> u32 {
    (rows as u32).saturating_mul(LINE_CLEAR_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 200);
        assert_eq!(line_clear_score(4), 400);
    }
}
