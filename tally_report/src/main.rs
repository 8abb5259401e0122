use std::process::ExitCode;

use tally::{
    domain::{
        statistics::{summarize, StatisticsError},
        Clock,
    },
    report::{render_directory, render_summary},
    TallyConfig,
};
use thiserror::Error;
use tracing::{debug, error, info, Level};

#[derive(Error, Debug)]
enum ReportError {
    #[error("Statistics error: {0}")]
    Statistics(#[from] StatisticsError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    match TallyConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .with_writer(std::io::stderr)
                .init();
            match run(&config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(error) => {
                    error!("レポート出力エラー: {}", error);
                    ExitCode::FAILURE
                }
            }
        }
        Err(error) => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .init();
            error!("設定読み込みエラー: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &TallyConfig) -> Result<(), ReportError> {
    let mileage = config.report.mileage();
    debug!("燃費データ: {} 件", mileage.len());
    let summary = summarize(&mileage)?;
    println!("{}", render_summary(&summary));

    let employees = config.report.employees();
    debug!("従業員データ: {} 件", employees.len());
    println!("{}", render_directory(&employees));

    let clock = config.report.clock();
    info!("基準日: {}", clock.today());
    for customer in &config.customers {
        let json = customer.to_json(&clock)?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    }
    Ok(())
}
