//! Text codec for values exposed through the console.
//!
//! Every type that can be bound to a console variable implements
//! [`ConsoleValue`], which defines its canonical text form.

use std::fmt;

/// Error returned when console text cannot be parsed into a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseValueError {
    /// The rejected input.
    pub input: String,
    /// Name of the target type.
    pub expected: &'static str,
}

impl ParseValueError {
    /// Create a parse error for `input` rejected by type `T`.
    pub fn new<T: ?Sized>(input: &str) -> Self {
        Self {
            input: input.to_string(),
            expected: std::any::type_name::<T>(),
        }
    }
}

impl fmt::Display for ParseValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse '{}' as {}", self.input, self.expected)
    }
}

impl std::error::Error for ParseValueError {}

/// Trait for types that can be shown and edited from the console.
///
/// Implemented for `bool`, `char`, `String`, every primitive integer type, `f32` and `f64`.
/// `parse(&format())` must yield the original value.
pub trait ConsoleValue: Sized {
    /// Parse a value from console text.
    fn parse(s: &str) -> Result<Self, ParseValueError>;

    /// Format the value as console text.
    fn format(&self) -> String;
}

impl ConsoleValue for bool {
    fn parse(s: &str) -> Result<Self, ParseValueError> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ParseValueError::new::<bool>(s)),
        }
    }

    fn format(&self) -> String {
        if *self { "1".to_string() } else { "0".to_string() }
    }
}

macro_rules! impl_console_value_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ConsoleValue for $ty {
                fn parse(s: &str) -> Result<Self, ParseValueError> {
                    s.trim().parse().map_err(|_| ParseValueError::new::<$ty>(s))
                }

                fn format(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_console_value_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_console_value_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ConsoleValue for $ty {
                fn parse(s: &str) -> Result<Self, ParseValueError> {
                    s.trim().parse().map_err(|_| ParseValueError::new::<$ty>(s))
                }

                fn format(&self) -> String {
                    // Display is the shortest text that parses back to the same value,
                    // and already omits the fraction for integral values.
                    self.to_string()
                }
            }
        )*
    };
}

impl_console_value_float!(f32, f64);

impl ConsoleValue for char {
    fn parse(s: &str) -> Result<Self, ParseValueError> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            // A lone space is trimmed away above; accept it from the raw input.
            (None, None) if s == " " => Ok(' '),
            _ => Err(ParseValueError::new::<char>(s)),
        }
    }

    fn format(&self) -> String {
        self.to_string()
    }
}

impl ConsoleValue for String {
    fn parse(s: &str) -> Result<Self, ParseValueError> {
        Ok(s.to_string())
    }

    fn format(&self) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_bool() {
        assert!(bool::parse("true").unwrap());
        assert!(bool::parse("1").unwrap());
        assert!(bool::parse("YES").unwrap());
        assert!(!bool::parse("off").unwrap());
        assert!(!bool::parse("0").unwrap());
        assert!(bool::parse("maybe").is_err());

        assert_eq!(true.format(), "1");
        assert_eq!(false.format(), "0");
    }

    #[test]
    fn test_value_int() {
        assert_eq!(i32::parse("42"), Ok(42));
        assert_eq!(i32::parse(" -7 "), Ok(-7));
        assert!(i32::parse("12abc").is_err());
        assert!(u8::parse("256").is_err());
        assert_eq!(u64::MAX.format(), "18446744073709551615");
    }

    #[test]
    fn test_value_float() {
        assert_eq!(800.0f32.format(), "800");
        assert_eq!(0.5f32.format(), "0.5");
        assert_eq!(f64::parse("1e3"), Ok(1000.0));
        assert!(f32::parse("fast").is_err());
    }

    #[test]
    fn test_value_char() {
        assert_eq!(char::parse("x"), Ok('x'));
        assert_eq!(char::parse(" "), Ok(' '));
        assert!(char::parse("xy").is_err());
        assert!(char::parse("").is_err());
    }

    #[test]
    fn test_value_string_keeps_spaces() {
        assert_eq!(String::parse("hello  world "), Ok("hello  world ".to_string()));
    }

    #[test]
    fn test_value_round_trip() {
        fn round_trip<T: ConsoleValue + PartialEq + std::fmt::Debug>(value: T) {
            assert_eq!(T::parse(&value.format()), Ok(value));
        }

        round_trip(true);
        round_trip(false);
        round_trip(i8::MIN);
        round_trip(i128::MAX);
        round_trip(usize::MAX);
        round_trip(0.1f32);
        round_trip(-1.0e-30f64);
        round_trip(f64::MAX);
        round_trip(f32::INFINITY);
        round_trip('é');
        round_trip(' ');
        round_trip(String::from("two words"));
        round_trip(String::new());
    }

    #[test]
    fn test_parse_error_display() {
        let err = i32::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "cannot parse 'abc' as i32");
    }
}
