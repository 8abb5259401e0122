use std::fmt;

use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use thiserror::Error;

/// 数値列の集計結果
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub sum: i64,
    pub average: f64,
    pub min: i64,
    pub max: i64,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("Cannot summarize an empty series")]
    Empty,
    #[error("Sum overflowed after {0} items")]
    Overflow(usize),
}

/// 件数・合計・平均・最小・最大を一度の走査で求める
pub fn summarize(values: &[i64]) -> Result<Summary, StatisticsError> {
    let (first, rest) = values.split_first().ok_or(StatisticsError::Empty)?;
    let mut summary = Summary {
        count: 1,
        sum: *first,
        average: 0.0,
        min: *first,
        max: *first,
    };
    for &n in rest {
        summary.sum = summary
            .sum
            .checked_add(n)
            .ok_or(StatisticsError::Overflow(summary.count))?;
        summary.count += 1;
        if n < summary.min {
            summary.min = n;
        } else if n > summary.max {
            summary.max = n;
        }
    }
    summary.average = summary.sum as f64 / summary.count as f64;
    Ok(summary)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The number of items: {}",
            self.count.to_formatted_string(&Locale::en)
        )?;
        writeln!(
            f,
            "The sum of the items: {}",
            self.sum.to_formatted_string(&Locale::en)
        )?;
        writeln!(f, "The average of the items: {}", self.average)?;
        writeln!(f, "The smallest number: {}", self.min)?;
        write!(f, "The largest number: {}", self.max)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::directory::MILEAGE;

    use super::*;

    #[test]
    fn test_summarize_mileage() {
        let summary = summarize(&MILEAGE).unwrap();
        assert_eq!(summary.count, MILEAGE.len());
        assert_eq!(summary.count, 34);
        assert_eq!(summary.sum, MILEAGE.iter().sum::<i64>());
        assert_eq!(summary.sum, 549);
        assert_eq!(summary.average, 549.0 / 34.0);
        assert_eq!(summary.min, 11);
        assert_eq!(summary.max, 22);
    }

    #[test]
    fn test_summarize_single() {
        let summary = summarize(&[-4]).unwrap();
        assert_eq!(
            summary,
            Summary {
                count: 1,
                sum: -4,
                average: -4.0,
                min: -4,
                max: -4,
            }
        );
    }

    #[test]
    fn test_extrema_after_first_item() {
        let summary = summarize(&[5, 1, 9, 3]).unwrap();
        assert_eq!(summary.min, 1);
        assert_eq!(summary.max, 9);
        assert_eq!(summary.average, 4.5);
    }

    #[test]
    fn test_summarize_empty() {
        assert_eq!(summarize(&[]), Err(StatisticsError::Empty));
    }

    #[test]
    fn test_summarize_overflow() {
        assert_eq!(
            summarize(&[i64::MAX, 1]),
            Err(StatisticsError::Overflow(1))
        );
    }

    #[test]
    fn test_summary_display() {
        let summary = summarize(&[1000, 2000, 3000]).unwrap();
        assert_eq!(
            summary.to_string(),
            "The number of items: 3\n\
             The sum of the items: 6,000\n\
             The average of the items: 2000\n\
             The smallest number: 1000\n\
             The largest number: 3000"
        );
    }
}
