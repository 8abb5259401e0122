use chrono::NaiveDate;
use config::{Config, ConfigError};
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};

use crate::domain::{
    customer::Customer,
    directory::{Directory, EmployeeId, EMPLOYEES, MILEAGE},
    Clock, FixedClock, SystemClock,
};

pub mod domain;
pub mod report;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub logger: Logger,
    #[serde(default)]
    pub report: Report,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl TallyConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("tally.toml")
    }

    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("_"))
            .build()?
            .try_deserialize::<TallyConfig>()
    }
}

#[serde_as]
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Report {
    /// 顧客の年齢計算に使う基準日。未指定ならシステム日付
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub today: Option<NaiveDate>,
    pub mileage: Option<Vec<i64>>,
    pub employees: Option<Vec<Employee>>,
}

impl Report {
    pub fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        }
    }

    pub fn mileage(&self) -> Vec<i64> {
        match &self.mileage {
            Some(values) => values.clone(),
            None => MILEAGE.to_vec(),
        }
    }

    pub fn employees(&self) -> Directory<EmployeeId, String> {
        match &self.employees {
            Some(list) => list
                .iter()
                .map(|e| (EmployeeId::from(e.number), e.name.clone()))
                .collect(),
            None => EMPLOYEES.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Employee {
    pub number: u32,
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Logger {
    #[serde(default)]
    pub level: Level,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub enum Level {
    TRACE,
    DEBUG,
    #[default]
    INFO,
    WARN,
    ERROR,
}

impl From<&Level> for tracing::Level {
    fn from(value: &Level) -> Self {
        match value {
            Level::TRACE => tracing::Level::TRACE,
            Level::DEBUG => tracing::Level::DEBUG,
            Level::INFO => tracing::Level::INFO,
            Level::WARN => tracing::Level::WARN,
            Level::ERROR => tracing::Level::ERROR,
        }
    }
}
