//! Utilities functions which do not linked to domain

use std::ops::{Div, Rem};

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
/// and a sign multiplier (`true` is the positive direction of an axis)
macro_rules! bool_enum {
    ($(#[$meta:meta])* $name:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal with $parse_err:ident) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            #[allow(missing_docs)]
            $truthy,
            #[allow(missing_docs)]
            $falsy,
        }

        impl $name {
            /// The multiplier applied to the axis projection: `+1` or `-1`
            pub const fn sign(self) -> f64 {
                match self {
                    Self::$truthy => 1.0,
                    Self::$falsy => -1.0,
                }
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    Self::$falsy => Self::$truthy,
                    Self::$truthy => Self::$falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    Self::$truthy
                } else {
                    Self::$falsy
                }
            }
        }

        #[derive(Debug, Clone, PartialEq, Eq)]
        /// The character does not denote a direction
        pub struct $parse_err {
            failed: String,
        }

        impl fmt::Display for $parse_err {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "Cannot parse {} from {:?}",
                    stringify!($name),
                    self.failed
                )
            }
        }

        impl Error for $parse_err {}

        impl TryFrom<char> for $name {
            type Error = $parse_err;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c.to_ascii_uppercase() {
                    $true_ch => Ok(Self::$truthy),
                    $false_ch => Ok(Self::$falsy),
                    _ => Err($parse_err {
                        failed: c.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    Self::$truthy => $true_ch,
                    Self::$falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}

/// Split a string into its first character and the rest of it
pub(crate) trait SplitChar<'a> {
    /// Split into the first character and the rest of the string
    fn split_first_char(self) -> Option<(char, &'a str)>;
}

impl<'a> SplitChar<'a> for &'a str {
    fn split_first_char(self) -> Option<(char, &'a str)> {
        let mut chars = self.chars();
        chars.next().map(|head| (head, chars.as_str()))
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_head() {
        let s = "Foo";
        assert_eq!(s.split_first_char().unwrap(), ('F', "oo"));
    }

    #[test]
    fn split_head_empty() {
        let s = "";
        assert!(s.split_first_char().is_none());
    }

    #[test]
    fn split_head_single() {
        let s = "Y";
        assert_eq!(s.split_first_char().unwrap(), ('Y', ""));
    }

    #[test]
    fn split_head_multibyte() {
        let s = "°12";
        assert_eq!(s.split_first_char().unwrap(), ('°', "12"));
    }

    #[test]
    fn test_div_mod() {
        assert_eq!(div_mod(15, 4), (3, 3));
        assert_eq!(div_mod(3_723_u32, 60), (62, 3));
    }
}
