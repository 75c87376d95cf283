use log::debug;

use crate::controllers::demo::calculation_record::CalculationRecord;
use crate::controllers::demo::demo_config::DemoConfig;
use crate::core::actions::calculate::complex_calculator::ComplexCalculator;

pub struct DemoController {
    config: DemoConfig,
}

impl DemoController {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Vec<CalculationRecord> {
        let DemoConfig { lhs, rhs, kinds } = &self.config;

        debug!("Running {} operation(s) on ({}) and ({})", kinds.len(), lhs, rhs);

        kinds
            .iter()
            .map(|&kind| {
                let calculator = ComplexCalculator::for_kind(kind);

                CalculationRecord {
                    kind,
                    lhs: *lhs,
                    rhs: *rhs,
                    result: calculator.calculate(*lhs, *rhs),
                }
            })
            .collect()
    }
}
