use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationKindParseError {
    Unknown { input: String },
}

impl fmt::Display for OperationKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { input } => {
                write!(f, "unknown operation '{}', expected one of: add, mul, div", input)
            }
        }
    }
}

impl Error for OperationKindParseError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationError {
    DivisionByZero,
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => {
                write!(f, "Divisor must not be the zero complex number")
            }
        }
    }
}

impl Error for OperationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_the_input() {
        let err = OperationKindParseError::Unknown {
            input: "pow".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "unknown operation 'pow', expected one of: add, mul, div"
        );
    }

    #[test]
    fn test_division_by_zero_message() {
        assert_eq!(
            OperationError::DivisionByZero.to_string(),
            "Divisor must not be the zero complex number"
        );
    }
}
