use chrono::{Datelike, Months, NaiveDate};
use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{serde_as, DisplayFromStr};

use crate::domain::{Clock, Id};

/// 成人とみなす年齢
pub const ADULT_AGE: u32 = 18;

/// 生年月日の書式
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// 顧客ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct CustomerId(u64);

impl Id for CustomerId {
    type Inner = u64;
}

/// 顧客
///
/// 年齢・成人区分・氏名は保持せず、参照のたびに生年月日と現在日付から算出する。
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    #[serde_as(as = "DisplayFromStr")]
    date_of_birth: NaiveDate,
    city: String,
    state: String,
    zip: String,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        first_name: String,
        last_name: String,
        date_of_birth: NaiveDate,
        city: String,
        state: String,
        zip: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            date_of_birth,
            city,
            state,
            zip,
        }
    }

    /// 生年月日を `YYYY-MM-DD` 形式の文字列で受け取る
    pub fn parse(
        id: CustomerId,
        first_name: String,
        last_name: String,
        date_of_birth: &str,
        city: String,
        state: String,
        zip: String,
    ) -> Result<Self, CustomerError> {
        let date_of_birth = NaiveDate::parse_from_str(date_of_birth, DATE_OF_BIRTH_FORMAT)
            .map_err(|_| CustomerError::InvalidDateOfBirth(date_of_birth.to_owned()))?;
        Ok(Self::new(
            id,
            first_name,
            last_name,
            date_of_birth,
            city,
            state,
            zip,
        ))
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// 指定日時点の満年齢
    ///
    /// 2月29日生まれは平年では2月28日に加齢する。生年月日が指定日より後なら0。
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        if today < self.date_of_birth {
            return 0;
        }
        let months = (today.year() - self.date_of_birth.year()) * 12 + today.month() as i32
            - self.date_of_birth.month() as i32;
        let mut months = months as u32;
        match self.date_of_birth.checked_add_months(Months::new(months)) {
            Some(anniversary) if anniversary <= today => {}
            _ => months -= 1,
        }
        months / 12
    }

    pub fn age(&self, clock: &impl Clock) -> u32 {
        self.age_on(clock.today())
    }

    pub fn is_adult_on(&self, today: NaiveDate) -> bool {
        self.age_on(today) >= ADULT_AGE
    }

    pub fn is_adult(&self, clock: &impl Clock) -> bool {
        self.is_adult_on(clock.today())
    }

    pub fn snapshot_on(&self, today: NaiveDate) -> CustomerSnapshot {
        let age = self.age_on(today);
        CustomerSnapshot {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            age,
            full_name: self.full_name(),
            adult: age >= ADULT_AGE,
        }
    }

    pub fn snapshot(&self, clock: &impl Clock) -> CustomerSnapshot {
        self.snapshot_on(clock.today())
    }

    pub fn to_json(&self, clock: &impl Clock) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self.snapshot(clock))
    }
}

/// 顧客のある時点での内容
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    #[serde_as(as = "DisplayFromStr")]
    pub date_of_birth: NaiveDate,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub age: u32,
    pub full_name: String,
    pub adult: bool,
}

/// 顧客エラー
#[derive(Error, Display, Debug, PartialEq, Eq)]
pub enum CustomerError {
    /// 生年月日が解釈できません
    #[display(fmt = "Invalid date of birth: {}", _0)]
    InvalidDateOfBirth(#[error(not(source))] String),
}
