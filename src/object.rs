use std::fmt;

/// Object.
///
/// Enumeration of the literal values a Lox token or literal expression can carry.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    String(String),
    Number(f64),
    Boolean(bool),
    None,
}

impl Object {
    /// Returns true if no value is present (Lox nil), false otherwise.
    ///
    pub fn is_none(&self) -> bool {
        matches!(self, Object::None)
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::String(string) => write!(f, "{}", string),
            Object::Number(number) => write!(f, "{}", number),
            Object::Boolean(value) => write!(f, "{}", value),
            Object::None => write!(f, "nil"),
        }
    }
}

impl From<f64> for Object {
    fn from(number: f64) -> Object {
        Object::Number(number)
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Object {
        Object::Boolean(value)
    }
}

impl From<&str> for Object {
    fn from(string: &str) -> Object {
        Object::String(String::from(string))
    }
}

impl From<String> for Object {
    fn from(string: String) -> Object {
        Object::String(string)
    }
}

#[cfg(test)]
mod tests {
    use crate::object::Object;

    // Strings are written raw, without quotes.
    //
    #[test]
    fn object_string_to_string() {
        let string = Object::String(String::from("ABC"));

        assert_eq!("ABC", string.to_string());
    }

    // Numbers without decimal should be displayed without decimal.
    //
    #[test]
    fn object_integer_to_string() {
        let number = Object::Number(123.0);

        assert_eq!("123", number.to_string());
    }

    // Numbers with decimal should be displayed with decimal.
    //
    #[test]
    fn object_number_to_string() {
        assert_eq!("45.67", Object::Number(45.67).to_string());
        assert_eq!("-0.5", Object::Number(-0.5).to_string());
    }

    #[test]
    fn object_boolean_to_string() {
        assert_eq!("false", Object::Boolean(false).to_string());
        assert_eq!("true", Object::Boolean(true).to_string());
    }

    // Object::None should be displayed as "nil".
    //
    #[test]
    fn object_none_to_string() {
        let object = Object::None;

        assert_eq!("nil", object.to_string());
        assert!(object.is_none());
    }

    #[test]
    fn object_from_rust_values() {
        assert_eq!(Object::Number(2.5), Object::from(2.5));
        assert_eq!(Object::Boolean(true), Object::from(true));
        assert_eq!(Object::String("hi".to_string()), Object::from("hi"));
        assert_eq!(Object::String("hi".to_string()), Object::from(String::from("hi")));
    }

    // Numbers use Rust's float formatting: no exponent, and "inf" for overflow.
    //
    #[test]
    fn object_extreme_number_to_string() {
        assert_eq!("1000000000000000000000", Object::Number(1e21).to_string());
        assert_eq!("inf", Object::Number(f64::INFINITY).to_string());
        assert_eq!("-inf", Object::Number(f64::NEG_INFINITY).to_string());
    }
}
