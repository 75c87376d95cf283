use crate::core::operations::{
    addition::AdditionOperation, division::DivisionOperation, kinds::OperationKinds,
    multiplication::MultiplicationOperation, ports::complex_operation::ComplexOperation,
};

#[must_use]
pub fn operation_factory(kind: OperationKinds) -> Box<dyn ComplexOperation> {
    match kind {
        OperationKinds::Addition => Box::new(AdditionOperation),
        OperationKinds::Multiplication => Box::new(MultiplicationOperation),
        OperationKinds::Division => Box::new(DivisionOperation),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::ComplexNumber;

    #[test]
    fn test_factory_round_trip_for_all_kinds() {
        for &kind in OperationKinds::ALL {
            let operation = operation_factory(kind);
            assert_eq!(operation.kind(), kind);
        }
    }

    #[test]
    fn test_display_names_match_between_kind_and_concrete() {
        for &kind in OperationKinds::ALL {
            let operation = operation_factory(kind);
            assert_eq!(operation.display_name(), kind.display_name());
        }
    }

    #[test]
    fn test_boxed_operations_match_concrete_results() {
        let a = ComplexNumber::new(2.0, 3.0);
        let b = ComplexNumber::new(1.0, -2.0);

        assert_eq!(
            operation_factory(OperationKinds::Addition).execute(a, b),
            AdditionOperation.execute(a, b)
        );
        assert_eq!(
            operation_factory(OperationKinds::Multiplication).execute(a, b),
            MultiplicationOperation.execute(a, b)
        );
        assert_eq!(
            operation_factory(OperationKinds::Division).execute(a, b),
            DivisionOperation.execute(a, b)
        );
    }
}
