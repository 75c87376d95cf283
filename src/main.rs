use log::info;

use complex_calculator::{CalculationRecord, DemoConfig, DemoController};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log_records(&run(std::env::args().skip(1))?);

    Ok(())
}

fn log_records(records: &[CalculationRecord]) {
    for record in records {
        info!("{}", record);
    }
}

fn run<I, S>(args: I) -> Result<Vec<CalculationRecord>, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let config = DemoConfig::from_args(args)?;
    let controller = DemoController::new(config);

    Ok(controller.run())
}
