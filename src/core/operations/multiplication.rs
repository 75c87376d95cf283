use crate::core::data::complex::ComplexNumber;
use crate::core::operations::kinds::OperationKinds;
use crate::core::operations::ports::complex_operation::ComplexOperation;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MultiplicationOperation;

impl ComplexOperation for MultiplicationOperation {
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
        a * b
    }

    fn kind(&self) -> OperationKinds {
        OperationKinds::Multiplication
    }
}
