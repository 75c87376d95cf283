use std::fmt;

use crate::core::data::complex::ComplexNumber;
use crate::core::operations::kinds::OperationKinds;

/// The outcome of one demo calculation, ready to be logged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRecord {
    pub kind: OperationKinds,
    pub lhs: ComplexNumber,
    pub rhs: ComplexNumber,
    pub result: ComplexNumber,
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {} = {}",
            self.kind,
            self.lhs,
            self.kind.symbol(),
            self.rhs,
            self.result
        )
    }
}
