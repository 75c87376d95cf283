use std::fmt::Debug;

use crate::core::data::complex::ComplexNumber;
use crate::core::operations::kinds::OperationKinds;

/// A binary arithmetic operation over complex numbers.
///
/// Implementations hold no state, so one instance can serve any number of
/// calls from any number of threads.
pub trait ComplexOperation: Debug + Send + Sync {
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber;

    fn kind(&self) -> OperationKinds;

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl ComplexOperation for Box<dyn ComplexOperation> {
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
        (**self).execute(a, b)
    }

    fn kind(&self) -> OperationKinds {
        (**self).kind()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

impl<O: ComplexOperation + ?Sized> ComplexOperation for &O {
    fn execute(&self, a: ComplexNumber, b: ComplexNumber) -> ComplexNumber {
        (**self).execute(a, b)
    }

    fn kind(&self) -> OperationKinds {
        (**self).kind()
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
