use std::fmt::{self, Display, Formatter};

/// Grids are indexed with `u8`.
pub(crate) const MAX_SIZE: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> i16 {
        (i16::from(self.r) - i16::from(other.r)).abs()
            + (i16::from(self.c) - i16::from(other.c)).abs()
    }

    /// Returns `None` if the result would be outside a grid of the given size.
    pub(crate) fn offset(self, dr: i32, dc: i32, rows: u8, cols: u8) -> Option<Pos> {
        // this is the only place we need to check bounds (using signed types)
        let (nr, nc) = (i32::from(self.r) + dr, i32::from(self.c) + dc);
        if nr < 0 || nc < 0 || nr >= i32::from(rows) || nc >= i32::from(cols) {
            None
        } else {
            Some(Pos::new(nr as u8, nc as u8))
        }
    }

    pub(crate) fn step(self, dir: Dir, rows: u8, cols: u8) -> Option<Pos> {
        let (dr, dc) = dir.offset();
        self.offset(dr, dc, rows, cols)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_stay_in_bounds() {
        let corner = Pos::new(0, 0);
        assert_eq!(corner.offset(-1, 0, 3, 3), None);
        assert_eq!(corner.offset(0, -1, 3, 3), None);
        assert_eq!(corner.offset(1, 1, 3, 3), Some(Pos::new(1, 1)));

        let far = Pos::new(2, 4);
        assert_eq!(far.offset(1, 0, 3, 5), None);
        assert_eq!(far.offset(0, 1, 3, 5), None);
        assert_eq!(far.step(Dir::Up, 3, 5), Some(Pos::new(1, 4)));
    }

    #[test]
    fn directions() {
        let center = Pos::new(1, 1);
        for &dir in &[Dir::Up, Dir::Right, Dir::Down, Dir::Left] {
            let next = center.step(dir, 3, 3).unwrap();
            assert_eq!(center.dist(next), 1);
            assert_ne!(next, center);
        }
        assert_eq!(Pos::new(0, 2).dist(Pos::new(2, 0)), 4);
    }
}
