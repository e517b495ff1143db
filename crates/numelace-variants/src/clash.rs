//! Which constraint instances may not be placed together.

use numelace_core::Cell;

use crate::Constraint;

impl Constraint {
    /// Returns `true` if `self` and `other` may not appear in the same puzzle.
    ///
    /// The relation is symmetric but not transitive. It is decided per pair of
    /// kinds. Two single-cell marks always clash, wherever they sit. Some
    /// kinds may overlap freely (a killer cage over any line, a whisper line
    /// through a capped line) while others may not share a cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use numelace_core::Cell;
    /// use numelace_variants::{Constraint, OddEven, Thermometer};
    ///
    /// let thermo: Constraint = Thermometer::new([0, 1, 2].map(Cell::new).to_vec())?.into();
    /// let on_line: Constraint = OddEven::new(Cell::new(1), true).into();
    /// let off_line: Constraint = OddEven::new(Cell::new(40), true).into();
    /// assert!(thermo.clashes_with(&on_line));
    /// assert!(on_line.clashes_with(&thermo));
    /// assert!(!thermo.clashes_with(&off_line));
    /// # Ok::<(), numelace_variants::ConstraintError>(())
    /// ```
    #[must_use]
    pub fn clashes_with(&self, other: &Self) -> bool {
        clashes_one_way(self, other) || clashes_one_way(other, self)
    }

    fn single_cell(&self) -> Option<Cell> {
        match self {
            Self::OddEven(c) => Some(c.cell()),
            Self::AntiKing(c) => Some(c.cell()),
            _ => None,
        }
    }

    fn intersects(&self, other: &Self) -> bool {
        self.touched_cells().intersects(&other.touched_cells())
    }
}

fn clashes_one_way(a: &Constraint, b: &Constraint) -> bool {
    use Constraint::{
        CappedLine, GermanWhisper, KillerCage, Palindrome, RenbanCage, Snowball, Thermometer,
    };

    if let Some(cell) = b.single_cell() {
        return match (a, a.single_cell()) {
            (_, Some(_)) => true,
            (
                Thermometer(_) | Palindrome(_) | GermanWhisper(_) | CappedLine(_) | RenbanCage(_),
                None,
            ) => a.touched_cells().contains(cell),
            _ => false,
        };
    }
    match (a, b) {
        (Thermometer(_), Thermometer(_) | Palindrome(_) | GermanWhisper(_))
        | (Palindrome(_), Palindrome(_))
        | (GermanWhisper(_), GermanWhisper(_))
        | (CappedLine(_), RenbanCage(_) | Thermometer(_) | Palindrome(_) | CappedLine(_))
        | (RenbanCage(_), RenbanCage(_) | Thermometer(_) | Palindrome(_))
        | (KillerCage(_), KillerCage(_))
        | (Snowball(_), KillerCage(_)) => a.intersects(b),
        (Snowball(x), Snowball(y)) => x.region_len() == y.region_len() || a.intersects(b),
        _ => false,
    }
}
