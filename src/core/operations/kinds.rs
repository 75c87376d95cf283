use std::str::FromStr;

use crate::core::operations::errors::OperationKindParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKinds {
    Addition,
    Multiplication,
    Division,
}

impl OperationKinds {
    pub const ALL: &'static [Self] = &[Self::Addition, Self::Multiplication, Self::Division];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Addition => "Addition",
            Self::Multiplication => "Multiplication",
            Self::Division => "Division",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Addition => '+',
            Self::Multiplication => '*',
            Self::Division => '/',
        }
    }
}

impl Default for OperationKinds {
    fn default() -> Self {
        Self::Addition
    }
}

impl std::fmt::Display for OperationKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for OperationKinds {
    type Err = OperationKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "addition" | "+" => Ok(Self::Addition),
            "mul" | "multiplication" | "*" => Ok(Self::Multiplication),
            "div" | "division" | "/" => Ok(Self::Division),
            _ => Err(OperationKindParseError::Unknown {
                input: s.to_string(),
            }),
        }
    }
}
