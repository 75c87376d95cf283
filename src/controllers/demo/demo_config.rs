use crate::core::data::complex::ComplexNumber;
use crate::core::data::complex_factory::ComplexNumberFactory;
use crate::core::operations::errors::OperationKindParseError;
use crate::core::operations::kinds::OperationKinds;

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub lhs: ComplexNumber,
    pub rhs: ComplexNumber,
    pub kinds: Vec<OperationKinds>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            lhs: ComplexNumberFactory::create(2.0, 3.0),
            rhs: ComplexNumberFactory::create(1.0, -2.0),
            kinds: OperationKinds::ALL.to_vec(),
        }
    }
}

impl DemoConfig {
    /// Builds a config from operation tags such as `add` or `/`. An empty
    /// argument list keeps every operation.
    pub fn from_args<I, S>(args: I) -> Result<Self, OperationKindParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kinds = args
            .into_iter()
            .map(|arg| arg.as_ref().parse())
            .collect::<Result<Vec<OperationKinds>, _>>()?;

        if kinds.is_empty() {
            return Ok(Self::default());
        }

        Ok(Self {
            kinds,
            ..Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_every_operation_on_sample_operands() {
        let config = DemoConfig::default();

        assert_eq!(config.lhs, ComplexNumber::new(2.0, 3.0));
        assert_eq!(config.rhs, ComplexNumber::new(1.0, -2.0));
        assert_eq!(config.kinds, OperationKinds::ALL);
    }

    #[test]
    fn test_from_args_empty_is_default() {
        let config = DemoConfig::from_args(Vec::<String>::new()).unwrap();

        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_from_args_keeps_order_and_duplicates() {
        let config = DemoConfig::from_args(["div", "add", "div"]).unwrap();

        assert_eq!(
            config.kinds,
            vec![
                OperationKinds::Division,
                OperationKinds::Addition,
                OperationKinds::Division
            ]
        );
    }

    #[test]
    fn test_from_args_rejects_unknown_tag() {
        let result = DemoConfig::from_args(["add", "sqrt"]);

        assert_eq!(
            result,
            Err(OperationKindParseError::Unknown {
                input: "sqrt".to_string()
            })
        );
    }
}
