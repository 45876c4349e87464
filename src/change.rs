//! Which side of a correction had to move.

/// Outcome of a correction: which fields differ from what the caller asked for.
///
/// A closed set of four values. The discriminants match the bit layout
/// `target = 0b01`, `dependent = 0b10`, so results combine with `|`.
///
/// ```
/// use rectfix::ChangeResult;
///
/// let mut change = ChangeResult::None;
/// change |= ChangeResult::TargetChanged;
/// change |= ChangeResult::DependentChanged;
/// assert_eq!(change, ChangeResult::BothChanged);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChangeResult {
    /// The requested value was accepted as-is.
    #[default]
    None = 0b00,
    /// The edited field was clamped away from the requested value.
    TargetChanged = 0b01,
    /// The paired field moved to restore the bound or minimum size.
    DependentChanged = 0b10,
    /// Both fields moved.
    BothChanged = 0b11,
}

impl ChangeResult {
    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Build from raw bits. Bits above `0b11` are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => Self::None,
            0b01 => Self::TargetChanged,
            0b10 => Self::DependentChanged,
            _ => Self::BothChanged,
        }
    }

    /// Whether the edited field differs from the requested value.
    pub const fn target_changed(self) -> bool {
        self.bits() & 0b01 != 0
    }

    /// Whether the paired field had to move.
    pub const fn dependent_changed(self) -> bool {
        self.bits() & 0b10 != 0
    }

    /// Whether nothing was corrected.
    pub const fn is_unchanged(self) -> bool {
        matches!(self, Self::None)
    }
}

impl core::ops::BitOr for ChangeResult {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self::from_bits(self.bits() | rhs.bits())
    }
}

impl core::ops::BitOrAssign for ChangeResult {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// A corrected rect together with what had to change to produce it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Corrected<R> {
    /// Rect satisfying the bound and minimum-size constraints.
    pub rect: R,
    /// Which of the edited and paired fields differ from the request.
    pub change: ChangeResult,
}

impl<R> Corrected<R> {
    /// Split into `(rect, change)`.
    pub fn into_parts(self) -> (R, ChangeResult) {
        (self.rect, self.change)
    }
}
