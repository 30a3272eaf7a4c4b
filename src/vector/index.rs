//!
//! Abstraction of types that can be used as a position in a sequence
//!
//! A position is either counted from the front (`0, 1, 2, ..`) or, for signed
//! integers below zero, from the back (`-1` is the last element).
//! Counting from the back is only honoured under `IndexMode::Wrapping`.
//!
//! Insertion points and range ends are gaps, `0..=len`. A negative gap `-k`
//! is the gap just before the `k`-th element from the back, so `-1` sits
//! before the last element and appending always takes `len` itself.
//!
use super::policy::IndexMode;
use std::fmt;

/// Position normalized into a direction and a distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offset {
    /// `i`-th element from the front
    Front(usize),
    /// `k`-th element from the back (`k >= 1`)
    Back(usize),
}

impl Offset {
    /// Absolute index relative to a container of length `len`.
    /// `None` if it counts from the back in `Absolute` mode or beyond the front.
    fn absolute(self, len: usize, mode: IndexMode) -> Option<usize> {
        match (self, mode) {
            (Offset::Front(i), _) => Some(i),
            (Offset::Back(k), IndexMode::Wrapping) => len.checked_sub(k),
            (Offset::Back(_), IndexMode::Absolute) => None,
        }
    }
    ///
    /// Resolve as an element position, `0 <= index < len`.
    pub fn to_element(self, len: usize, mode: IndexMode) -> Option<usize> {
        self.absolute(len, mode).filter(|&index| index < len)
    }
    ///
    /// Resolve as a gap between elements (insertion point or range end),
    /// `0 <= index <= len`.
    pub fn to_gap(self, len: usize, mode: IndexMode) -> Option<usize> {
        self.absolute(len, mode).filter(|&index| index <= len)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Offset::Front(i) => write!(f, "{}", i),
            Offset::Back(k) => write!(f, "-{}", k),
        }
    }
}

pub trait Position: Copy {
    fn offset(self) -> Offset;
}

impl Position for Offset {
    #[inline]
    fn offset(self) -> Offset {
        self
    }
}

impl Position for usize {
    #[inline]
    fn offset(self) -> Offset {
        Offset::Front(self)
    }
}

impl Position for u32 {
    #[inline]
    fn offset(self) -> Offset {
        Offset::Front(self as usize)
    }
}

macro_rules! impl_signed_position {
    ($($t:ty),*) => {
        $(
            impl Position for $t {
                #[inline]
                fn offset(self) -> Offset {
                    if self < 0 {
                        Offset::Back(self.unsigned_abs() as usize)
                    } else {
                        Offset::Front(self as usize)
                    }
                }
            }
        )*
    };
}

impl_signed_position!(isize, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_offset() {
        assert_eq!(3usize.offset(), Offset::Front(3));
        assert_eq!(3u32.offset(), Offset::Front(3));
        assert_eq!(0i32.offset(), Offset::Front(0));
        assert_eq!((-1i32).offset(), Offset::Back(1));
        assert_eq!((-7isize).offset(), Offset::Back(7));
        assert_eq!(i64::MIN.offset(), Offset::Back(1usize << 63));
    }
    #[test]
    fn resolve_absolute() {
        let m = IndexMode::Absolute;
        assert_eq!(Offset::Front(0).to_element(3, m), Some(0));
        assert_eq!(Offset::Front(2).to_element(3, m), Some(2));
        assert_eq!(Offset::Front(3).to_element(3, m), None);
        assert_eq!(Offset::Front(3).to_gap(3, m), Some(3));
        assert_eq!(Offset::Front(4).to_gap(3, m), None);
        assert_eq!(Offset::Back(1).to_element(3, m), None);
        assert_eq!(Offset::Front(0).to_element(0, m), None);
        assert_eq!(Offset::Front(0).to_gap(0, m), Some(0));
    }
    #[test]
    fn resolve_wrapping() {
        let m = IndexMode::Wrapping;
        assert_eq!(Offset::Back(1).to_element(3, m), Some(2));
        assert_eq!(Offset::Back(3).to_element(3, m), Some(0));
        assert_eq!(Offset::Back(4).to_element(3, m), None);
        assert_eq!(Offset::Back(1).to_gap(3, m), Some(2));
        assert_eq!(Offset::Back(1).to_element(0, m), None);
        assert_eq!(Offset::Front(5).to_element(3, m), None);
    }
    #[test]
    fn offset_display() {
        assert_eq!(Offset::Front(10).to_string(), "10");
        assert_eq!(Offset::Back(2).to_string(), "-2");
    }
}
