mod controllers;
mod core;

pub use crate::controllers::demo::calculation_record::CalculationRecord;
pub use crate::controllers::demo::demo_config::DemoConfig;
pub use crate::controllers::demo::demo_controller::DemoController;
pub use crate::core::actions::calculate::complex_calculator::ComplexCalculator;
pub use crate::core::data::complex::ComplexNumber;
pub use crate::core::data::complex_factory::ComplexNumberFactory;
pub use crate::core::operations::addition::AdditionOperation;
pub use crate::core::operations::division::DivisionOperation;
pub use crate::core::operations::errors::{OperationError, OperationKindParseError};
pub use crate::core::operations::factory::operation_factory;
pub use crate::core::operations::kinds::OperationKinds;
pub use crate::core::operations::multiplication::MultiplicationOperation;
pub use crate::core::operations::ports::complex_operation::ComplexOperation;
