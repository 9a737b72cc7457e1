//! Winning line enumeration.

use serde::{Deserialize, Serialize};

/// Cell indices that win the game when uniformly marked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(Vec<usize>);

impl Line {
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<usize>> for Line {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// All lines of a `dimension`-sided board.
///
/// Lines come in a fixed order: rows top to bottom, columns left to right,
/// the main diagonal, then the anti-diagonal. Evaluation relies on this
/// order to pick a single winning line.
///
/// # Example
///
/// ```rust
/// use tictactoe_timeline::rules::lines;
///
/// let lines = lines(3);
/// assert_eq!(lines.len(), 8);
/// assert_eq!(lines[0].indices(), &[0, 1, 2]);
/// assert_eq!(lines[3].indices(), &[0, 3, 6]);
/// assert_eq!(lines[7].indices(), &[2, 4, 6]);
/// ```
pub fn lines(dimension: usize) -> Vec<Line> {
    let n = dimension;
    let rows = (0..n).map(|row| (0..n).map(|col| row * n + col).collect::<Vec<_>>());
    let cols = (0..n).map(|col| (0..n).map(|row| row * n + col).collect::<Vec<_>>());
    let diagonals = (n > 0).then(|| {
        [
            (0..n).map(|i| i * n + i).collect::<Vec<_>>(),
            (0..n).map(|i| i * n + (n - 1 - i)).collect::<Vec<_>>(),
        ]
    });

    rows.chain(cols)
        .chain(diagonals.into_iter().flatten())
        .map(Line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_by_three_has_eight_lines() {
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
            vec![0, 3, 6],
            vec![1, 4, 7],
            vec![2, 5, 8],
            vec![0, 4, 8],
            vec![2, 4, 6],
        ];
        let actual: Vec<Vec<usize>> = lines(3).into_iter().map(|l| l.0).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn line_count_is_two_n_plus_two() {
        for n in 1..8 {
            let lines = lines(n);
            assert_eq!(lines.len(), 2 * n + 2);
            assert!(lines.iter().all(|line| line.len() == n));
        }
    }

    #[test]
    fn four_by_four_diagonals() {
        let lines = lines(4);
        assert_eq!(lines[8].indices(), &[0, 5, 10, 15]);
        assert_eq!(lines[9].indices(), &[3, 6, 9, 12]);
    }

    #[test]
    fn zero_dimension_has_no_lines() {
        assert!(lines(0).is_empty());
    }

    #[test]
    fn contains_checks_membership() {
        let line = Line::from(vec![0, 4, 8]);
        assert!(line.contains(4));
        assert!(!line.contains(5));
    }
}
