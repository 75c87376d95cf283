use crate::core::data::complex::ComplexNumber;
use crate::core::operations::errors::OperationError;
use crate::core::operations::kinds::OperationKinds;
use crate::core::operations::ports::complex_operation::ComplexOperation;

/// Complex division by the conjugate method.
///
/// [`ComplexOperation::execute`] never fails: a zero divisor produces NaN or
/// infinite components. Use [`DivisionOperation::checked_execute`] to get an
/// error instead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DivisionOperation;

impl DivisionOperation {
    pub fn checked_execute(
        &self,
        a: ComplexNumber,
        b: ComplexNumber,
    ) -> Result<ComplexNumber, OperationError> {
        if b.is_zero() {
            return Err(OperationError::DivisionByZero);
        }

        Ok(self.execute(a, b))
    }
}

impl ComplexOperation for DivisionOperation {
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
        a / b
    }

    fn kind(&self) -> OperationKinds {
        OperationKinds::Division
    }
}
