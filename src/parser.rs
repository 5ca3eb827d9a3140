use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::config::Pattern;
use crate::data::MAX_SIZE;
use crate::eight_puzzle::{self, Board};
use crate::puzzle::{EightPuzzle, LightsOutPuzzle};
use crate::vec2d::Vec2d;

/// Line numbers start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    MissingHeader(usize),
    Header(usize),
    LineLength(usize),
    Pos(usize, usize),
    TooLarge(usize),
    NotPermutation(usize),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::MissingHeader(l) => write!(f, "Grid without a header on line {}", l),
            ParserErr::Header(l) => write!(f, "Invalid header on line {}", l),
            ParserErr::LineLength(l) => write!(f, "Wrong line length on line {}", l),
            ParserErr::Pos(l, c) => write!(f, "Invalid character on line {} column {}", l, c),
            ParserErr::TooLarge(l) => {
                write!(f, "Grid larger than {} rows/columns on line {}", MAX_SIZE, l)
            }
            ParserErr::NotPermutation(l) => {
                write!(f, "Tiles are not a permutation of 0-8 on line {}", l)
            }
        }
    }
}

impl Error for ParserErr {}

/// Parses Lights Out puzzles.
///
/// A header line `# <rows> <cols> <+|X> <shortest solution length>` applies to all grids
/// after it until the next header. Each grid is a line of `rows * cols` zeros and ones
/// in row-major order. `+` toggles orthogonal neighbors, `X` diagonal ones.
pub fn parse_lights_out(text: &str) -> Result<Vec<LightsOutPuzzle>, ParserErr> {
    let mut puzzles = Vec::new();
    let mut header = None;

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('#') {
            header = Some(parse_header(line, line_num)?);
            continue;
        }

        let (rows, cols, pattern, expected) = header.ok_or(ParserErr::MissingHeader(line_num))?;
        if line.chars().count() != rows * cols {
            return Err(ParserErr::LineLength(line_num));
        }

        let mut grid = vec![Vec::with_capacity(cols); rows];
        for (index, c) in line.chars().enumerate() {
            let light = match c {
                '0' => 0,
                '1' => 1,
                _ => return Err(ParserErr::Pos(line_num, index + 1)),
            };
            grid[index / cols].push(light);
        }
        puzzles.push(LightsOutPuzzle::new(Vec2d::new(&grid), pattern, expected));
    }

    Ok(puzzles)
}

fn parse_header(
    line: &str,
    line_num: usize,
) -> Result<(usize, usize, Pattern, Option<usize>), ParserErr> {
    let parts: Vec<_> = line.split_whitespace().collect();
    if parts.len() < 4 || parts.len() > 5 || parts[0] != "#" {
        return Err(ParserErr::Header(line_num));
    }

    let rows: usize = parts[1].parse().map_err(|_| ParserErr::Header(line_num))?;
    let cols: usize = parts[2].parse().map_err(|_| ParserErr::Header(line_num))?;
    if rows == 0 || cols == 0 {
        return Err(ParserErr::Header(line_num));
    }
    if rows > MAX_SIZE || cols > MAX_SIZE {
        return Err(ParserErr::TooLarge(line_num));
    }

    let pattern = match parts[3] {
        "+" => Pattern::Plus,
        "X" | "x" => Pattern::Cross,
        _ => return Err(ParserErr::Header(line_num)),
    };

    let expected = match parts.get(4) {
        None => None,
        Some(len) => Some(len.parse().map_err(|_| ParserErr::Header(line_num))?),
    };

    Ok((rows, cols, pattern, expected))
}

/// Parses Eight Puzzle boards, one per line as 9 digits in row-major order
/// optionally followed by the length of the shortest solution.
pub fn parse_eight_puzzles(text: &str) -> Result<Vec<EightPuzzle>, ParserErr> {
    let mut puzzles = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_num = i + 1;
        let mut parts = line.split_whitespace();
        let tiles = match parts.next() {
            None => continue,
            Some(tiles) => tiles,
        };
        let expected = match parts.next() {
            None => None,
            Some(len) => Some(len.parse().map_err(|_| ParserErr::LineLength(line_num))?),
        };
        if parts.next().is_some() || tiles.chars().count() != 9 {
            return Err(ParserErr::LineLength(line_num));
        }

        let mut board: Board = [[0; 3]; 3];
        for (index, c) in tiles.chars().enumerate() {
            let tile = c
                .to_digit(10)
                .ok_or(ParserErr::Pos(line_num, index + 1))?;
            board[index / 3][index % 3] = tile as u8;
        }
        if !eight_puzzle::is_permutation(&board) {
            return Err(ParserErr::NotPermutation(line_num));
        }

        puzzles.push(EightPuzzle::new(board, expected));
    }

    Ok(puzzles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lights_out() {
        let text = r"
# 2 3 + 4
101010
000111

# 2 2 X 1
1001
";
        let puzzles = parse_lights_out(text).unwrap();
        assert_eq!(puzzles.len(), 3);

        assert_eq!(puzzles[0].grid.to_string(), "1 0 1\n0 1 0\n");
        assert_eq!(puzzles[0].pattern, Pattern::Plus);
        assert_eq!(puzzles[0].expected, Some(4));
        assert_eq!(puzzles[1].grid.to_string(), "0 0 0\n1 1 1\n");
        assert_eq!(puzzles[1].pattern, Pattern::Plus);

        assert_eq!(puzzles[2].grid.to_string(), "1 0\n0 1\n");
        assert_eq!(puzzles[2].pattern, Pattern::Cross);
        assert_eq!(puzzles[2].expected, Some(1));
    }

    #[test]
    fn lights_out_without_expected_len() {
        let puzzles = parse_lights_out("# 1 2 +\n10\n").unwrap();
        assert_eq!(puzzles[0].expected, None);
    }

    #[test]
    fn lights_out_errors() {
        assert_eq!(parse_lights_out("1001"), Err(ParserErr::MissingHeader(1)));
        assert_eq!(parse_lights_out("# 2 2 * 1\n1001"), Err(ParserErr::Header(1)));
        assert_eq!(parse_lights_out("# 2 two + 1\n1001"), Err(ParserErr::Header(1)));
        assert_eq!(parse_lights_out("# 2 2 + 1\n100"), Err(ParserErr::LineLength(2)));
        assert_eq!(parse_lights_out("# 2 2 + 1\n\n1021"), Err(ParserErr::Pos(3, 3)));
        assert_eq!(parse_lights_out("# 300 1 +"), Err(ParserErr::TooLarge(1)));
        assert_eq!(
            parse_lights_out("# 0 1 +").unwrap_err().to_string(),
            "Invalid header on line 1"
        );
    }

    #[test]
    fn eight_puzzles() {
        let text = "120345678 2\n\n312045678\n";
        let puzzles = parse_eight_puzzles(text).unwrap();
        assert_eq!(
            puzzles,
            vec![
                EightPuzzle::new([[1, 2, 0], [3, 4, 5], [6, 7, 8]], Some(2)),
                EightPuzzle::new([[3, 1, 2], [0, 4, 5], [6, 7, 8]], None),
            ]
        );
    }

    #[test]
    fn eight_puzzle_errors() {
        assert_eq!(parse_eight_puzzles("12345678"), Err(ParserErr::LineLength(1)));
        assert_eq!(parse_eight_puzzles("012345678 x"), Err(ParserErr::LineLength(1)));
        assert_eq!(parse_eight_puzzles("012345678 1 2"), Err(ParserErr::LineLength(1)));
        assert_eq!(parse_eight_puzzles("0123a5678"), Err(ParserErr::Pos(1, 5)));
        assert_eq!(parse_eight_puzzles("012345677"), Err(ParserErr::NotPermutation(1)));
        assert_eq!(parse_eight_puzzles("012345679"), Err(ParserErr::NotPermutation(1)));
    }
}
