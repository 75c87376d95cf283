use log::trace;

use crate::core::data::complex::ComplexNumber;
use crate::core::operations::factory::operation_factory;
use crate::core::operations::kinds::OperationKinds;
use crate::core::operations::ports::complex_operation::ComplexOperation;

/// Applies one injected [`ComplexOperation`] to operand pairs.
///
/// The calculator never inspects which operation it holds; it works the same
/// with a concrete operation, a reference to one, or a boxed trait object.
#[derive(Debug, Clone)]
pub struct ComplexCalculator<O: ComplexOperation> {
    operation: O,
}

impl<O: ComplexOperation> ComplexCalculator<O> {
    pub fn new(operation: O) -> Self {
        Self { operation }
    }

    pub fn calculate(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
        let result = self.operation.execute(a, b);

        trace!("{} ({}) ({}) -> ({})", self.operation.display_name(), a, b, result);

        result
    }

    pub fn operation(&self) -> &O {
        &self.operation
    }

    pub fn kind(&self) -> OperationKinds {
        self.operation.kind()
    }
}

impl ComplexCalculator<Box<dyn ComplexOperation>> {
    pub fn for_kind(kind: OperationKinds) -> Self {
        Self::new(operation_factory(kind))
    }
}
