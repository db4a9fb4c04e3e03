//! Numeric editing parameters.
//!
//! Integer and float editors receive the value widened to `i128` / `f64`
//! together with a kind describing the real storage, so one widget routine
//! serves every primitive width.

/// Byte width and signedness of an integer primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntKind {
    pub bytes: u8,
    pub signed: bool,
}

impl IntKind {
    pub const fn of<T>(signed: bool) -> Self {
        Self {
            bytes: std::mem::size_of::<T>() as u8,
            signed,
        }
    }

    /// Smallest representable value.
    pub const fn min(self) -> i128 {
        if self.signed {
            -(1i128 << (self.bytes as u32 * 8 - 1))
        } else {
            0
        }
    }

    /// Largest representable value.
    pub const fn max(self) -> i128 {
        if self.signed {
            (1i128 << (self.bytes as u32 * 8 - 1)) - 1
        } else {
            (1i128 << (self.bytes as u32 * 8)) - 1
        }
    }

    /// Clamps a widened value into this kind's range.
    pub fn clamp(self, value: i128) -> i128 {
        value.clamp(self.min(), self.max())
    }
}

/// Precision of a floating-point primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatKind {
    Single,
    Double,
}

impl FloatKind {
    /// Digits shown after the decimal point.
    pub const fn decimals(self) -> usize {
        match self {
            FloatKind::Single => 3,
            FloatKind::Double => 6,
        }
    }
}

/// Integer primitive that round-trips through the widened `i128` editor value.
pub trait Integer: Copy + std::fmt::Display + 'static {
    const KIND: IntKind;

    fn widen(self) -> i128;

    /// Converts back, saturating at the type's bounds.
    fn narrow(value: i128) -> Self;
}

macro_rules! impl_integer {
    ($signed:expr => $($ty:ty),+) => {$(
        impl Integer for $ty {
            const KIND: IntKind = IntKind::of::<$ty>($signed);

            fn widen(self) -> i128 {
                self as i128
            }

            fn narrow(value: i128) -> Self {
                Self::KIND.clamp(value) as $ty
            }
        }
    )+};
}

impl_integer!(true => i8, i16, i32, i64, isize);
impl_integer!(false => u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_match_std() {
        assert_eq!(IntKind::of::<u8>(false).max(), u8::MAX as i128);
        assert_eq!(IntKind::of::<i8>(true).min(), i8::MIN as i128);
        assert_eq!(IntKind::of::<i64>(true).max(), i64::MAX as i128);
        assert_eq!(IntKind::of::<u64>(false).max(), u64::MAX as i128);
        assert_eq!(IntKind::of::<u32>(false).min(), 0);
    }

    #[test]
    fn narrow_saturates_at_bounds() {
        assert_eq!(u8::narrow(300), u8::MAX);
        assert_eq!(u8::narrow(-5), 0);
        assert_eq!(i32::narrow(-7), -7);
        assert_eq!(usize::KIND.bytes as usize, std::mem::size_of::<usize>());
    }

    #[test]
    fn clamp_saturates() {
        let kind = IntKind::of::<i16>(true);
        assert_eq!(kind.clamp(100_000), i16::MAX as i128);
        assert_eq!(kind.clamp(-100_000), i16::MIN as i128);
        assert_eq!(kind.clamp(42), 42);
    }
}
