//! The common constraint interface.
//!
//! Every concrete constraint type implements [`Variant`]. [`Constraint`] is
//! the closed set of all of them, used wherever instances of different kinds
//! are mixed (discovery output, clash checks, examples).

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use numelace_core::{Cell, CellSet, Grid};

use crate::{
    AntiKing, CappedLine, Example, GermanWhisper, KillerCage, OddEven, Palindrome, Primitive,
    RenbanCage, Shape, Snowball, Thermometer, VariantError,
};

/// Behaviour shared by every constraint type.
pub trait Variant: Clone + Into<Constraint> {
    /// The kind this type implements.
    const KIND: VariantKind;

    /// Returns the constrained cells in their natural order (line order for
    /// lines, ascending for regions).
    fn cells(&self) -> Vec<Cell>;

    /// Returns the constrained cells as a set.
    fn touched_cells(&self) -> CellSet {
        self.cells().into_iter().collect()
    }

    /// Returns `true` if `grid` satisfies the constraint.
    fn verify(&self, grid: &Grid) -> bool;

    /// Compiles the constraint into declarative solver primitives.
    fn primitives(&self) -> Vec<Primitive>;

    /// Returns the drawable representation.
    fn shape(&self) -> Shape;

    /// Returns the rule text shown to the player.
    fn description(&self) -> String;

    /// Returns a worked demonstration of the rule.
    fn example() -> Example;
}

/// The kinds of constraint this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum VariantKind {
    /// Digits increase from the bulb.
    Thermometer,
    /// Digits read the same from both ends.
    Palindrome,
    /// Neighbouring digits differ by at least 5.
    GermanWhisper,
    /// Digits lie between the two end digits.
    CappedLine,
    /// Two regions hold the same digits up to an addend.
    Snowball,
    /// A cell's digit is odd or even.
    OddEven,
    /// A cell's digit does not repeat a king's move away.
    AntiKing,
    /// Digits in a cage are distinct, with an optional sum.
    KillerCage,
    /// Digits in a cage are distinct and consecutive.
    RenbanCage,
}

impl VariantKind {
    /// Every kind, searched kinds first.
    pub const ALL: [Self; 9] = [
        Self::Thermometer,
        Self::Palindrome,
        Self::GermanWhisper,
        Self::CappedLine,
        Self::Snowball,
        Self::OddEven,
        Self::AntiKing,
        Self::KillerCage,
        Self::RenbanCage,
    ];

    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thermometer => "Thermometer",
            Self::Palindrome => "Palindrome",
            Self::GermanWhisper => "German whisper",
            Self::CappedLine => "Between line",
            Self::Snowball => "Snowball",
            Self::OddEven => "Odd/even",
            Self::AntiKing => "Anti-king",
            Self::KillerCage => "Killer cage",
            Self::RenbanCage => "Renban cage",
        }
    }

    /// Returns the kebab-case identifier accepted by [`FromStr`].
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Thermometer => "thermometer",
            Self::Palindrome => "palindrome",
            Self::GermanWhisper => "german-whisper",
            Self::CappedLine => "capped-line",
            Self::Snowball => "snowball",
            Self::OddEven => "odd-even",
            Self::AntiKing => "anti-king",
            Self::KillerCage => "killer-cage",
            Self::RenbanCage => "renban-cage",
        }
    }

    /// Returns `true` for kinds discovered by backtracking search rather than a
    /// single pass over the grid.
    #[must_use]
    pub const fn is_searched(self) -> bool {
        matches!(
            self,
            Self::Thermometer
                | Self::Palindrome
                | Self::GermanWhisper
                | Self::CappedLine
                | Self::Snowball
        )
    }

    /// Returns the worked demonstration of this kind.
    #[must_use]
    pub fn example(self) -> Example {
        match self {
            Self::Thermometer => Thermometer::example(),
            Self::Palindrome => Palindrome::example(),
            Self::GermanWhisper => GermanWhisper::example(),
            Self::CappedLine => CappedLine::example(),
            Self::Snowball => Snowball::example(),
            Self::OddEven => OddEven::example(),
            Self::AntiKing => AntiKing::example(),
            Self::KillerCage => KillerCage::example(),
            Self::RenbanCage => RenbanCage::example(),
        }
    }
}

impl Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantKind {
    type Err = VariantError;

    /// Accepts the slug or the display name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s) || kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| VariantError::UnknownKind { name: s.to_owned() })
    }
}

/// A constraint instance of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::From, derive_more::IsVariant)]
pub enum Constraint {
    /// See [`Thermometer`].
    Thermometer(Thermometer),
    /// See [`Palindrome`].
    Palindrome(Palindrome),
    /// See [`GermanWhisper`].
    GermanWhisper(GermanWhisper),
    /// See [`CappedLine`].
    CappedLine(CappedLine),
    /// See [`Snowball`].
    Snowball(Snowball),
    /// See [`OddEven`].
    OddEven(OddEven),
    /// See [`AntiKing`].
    AntiKing(AntiKing),
    /// See [`KillerCage`].
    KillerCage(KillerCage),
    /// See [`RenbanCage`].
    RenbanCage(RenbanCage),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Constraint::Thermometer($inner) => $body,
            Constraint::Palindrome($inner) => $body,
            Constraint::GermanWhisper($inner) => $body,
            Constraint::CappedLine($inner) => $body,
            Constraint::Snowball($inner) => $body,
            Constraint::OddEven($inner) => $body,
            Constraint::AntiKing($inner) => $body,
            Constraint::KillerCage($inner) => $body,
            Constraint::RenbanCage($inner) => $body,
        }
    };
}

impl Constraint {
    /// Returns the kind of this instance.
    #[must_use]
    pub const fn kind(&self) -> VariantKind {
        match self {
            Self::Thermometer(_) => VariantKind::Thermometer,
            Self::Palindrome(_) => VariantKind::Palindrome,
            Self::GermanWhisper(_) => VariantKind::GermanWhisper,
            Self::CappedLine(_) => VariantKind::CappedLine,
            Self::Snowball(_) => VariantKind::Snowball,
            Self::OddEven(_) => VariantKind::OddEven,
            Self::AntiKing(_) => VariantKind::AntiKing,
            Self::KillerCage(_) => VariantKind::KillerCage,
            Self::RenbanCage(_) => VariantKind::RenbanCage,
        }
    }

    /// Returns the display name of the kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Returns the rule text shown to the player.
    #[must_use]
    pub fn description(&self) -> String {
        dispatch!(self, c => c.description())
    }

    /// Returns the constrained cells.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        dispatch!(self, c => c.cells())
    }

    /// Returns the constrained cells as a set.
    #[must_use]
    pub fn touched_cells(&self) -> CellSet {
        dispatch!(self, c => c.touched_cells())
    }

    /// Returns `true` if `grid` satisfies the constraint.
    #[must_use]
    pub fn verify(&self, grid: &Grid) -> bool {
        dispatch!(self, c => c.verify(grid))
    }

    /// Compiles the constraint into declarative solver primitives.
    #[must_use]
    pub fn primitives(&self) -> Vec<Primitive> {
        dispatch!(self, c => c.primitives())
    }

    /// Returns the drawable representation.
    #[must_use]
    pub fn shape(&self) -> Shape {
        dispatch!(self, c => c.shape())
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        for (i, cell) in self.cells().into_iter().enumerate() {
            write!(f, "{}{cell}", if i == 0 { " " } else { "-" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in VariantKind::ALL {
            assert_eq!(kind.slug().parse::<VariantKind>().unwrap(), kind);
            assert_eq!(kind.name().parse::<VariantKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.name());
        }
        assert_eq!(
            "GERMAN-WHISPER".parse::<VariantKind>().unwrap(),
            VariantKind::GermanWhisper
        );
        assert_eq!(
            "sandwich".parse::<VariantKind>(),
            Err(VariantError::UnknownKind {
                name: "sandwich".to_owned()
            })
        );
    }

    #[test]
    fn test_searched_kinds() {
        let searched: Vec<_> = VariantKind::ALL
            .into_iter()
            .filter(|k| k.is_searched())
            .collect();
        assert_eq!(searched, VariantKind::ALL[..5]);
    }

    #[test]
    fn test_every_example_is_consistent() {
        for kind in VariantKind::ALL {
            let example = kind.example();
            assert!(example.is_consistent(), "{kind}");
            assert!(example.constraints.iter().all(|c| c.kind() == kind));
            assert_eq!(example.good.len(), example.cells.len());
            assert_eq!(example.bad.len(), example.cells.len());
            for constraint in &example.constraints {
                assert!(
                    constraint
                        .touched_cells()
                        .iter()
                        .all(|cell| example.cells.contains(&cell))
                );
            }
        }
    }

    #[test]
    fn test_primitives_agree_with_verify_on_examples() {
        for kind in VariantKind::ALL {
            let example = kind.example();
            for grid in [example.good_grid().unwrap(), example.bad_grid().unwrap()] {
                for constraint in &example.constraints {
                    let compiled = constraint
                        .primitives()
                        .iter()
                        .all(|p| p.is_satisfied_by(&grid));
                    assert_eq!(compiled, constraint.verify(&grid), "{constraint}");
                }
            }
        }
    }

    #[test]
    fn test_display_lists_cells() {
        let thermo = Thermometer::new(vec![Cell::new(0), Cell::new(1), Cell::new(2)]).unwrap();
        assert_eq!(
            Constraint::from(thermo).to_string(),
            "Thermometer r1c1-r1c2-r1c3"
        );
    }
}
