use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

pub const NUMBER_MIN: u8 = 1;
pub const NUMBER_MAX: u8 = 45;
pub const NUMBERS_PER_DRAW: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidDrawNumbers {
    #[error("expected 6 numbers, got {0}")]
    WrongLength(usize),
    #[error("number {0} is outside 1..=45")]
    OutOfRange(u8),
    #[error("number {0} appears more than once")]
    Duplicate(u8),
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

/// Six distinct numbers in `NUMBER_MIN..=NUMBER_MAX`, always sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DrawNumbers([u8; NUMBERS_PER_DRAW]);

impl DrawNumbers {
    /// Sorts the input and checks range and uniqueness.
    pub fn new(numbers: &[u8]) -> Result<Self, InvalidDrawNumbers> {
        let mut sorted: [u8; NUMBERS_PER_DRAW] = numbers
            .try_into()
            .map_err(|_| InvalidDrawNumbers::WrongLength(numbers.len()))?;
        sorted.sort_unstable();

        for (i, &number) in sorted.iter().enumerate() {
            if !(NUMBER_MIN..=NUMBER_MAX).contains(&number) {
                return Err(InvalidDrawNumbers::OutOfRange(number));
            }
            if i > 0 && sorted[i - 1] == number {
                return Err(InvalidDrawNumbers::Duplicate(number));
            }
        }

        Ok(Self(sorted))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Column form used by the `draws` table, e.g. `"4,11,19,23,30,45"`.
    pub fn to_column(&self) -> String {
        self.0
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn from_column(value: &str) -> Result<Self, InvalidDrawNumbers> {
        let numbers = value
            .split(',')
            .map(|part| {
                let part = part.trim();
                part.parse::<u8>()
                    .map_err(|_| InvalidDrawNumbers::NotANumber(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&numbers)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draw {
    pub id: i64,
    pub numbers: DrawNumbers,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberFrequency {
    pub number: u8,
    pub count: u64,
}

/// Ranked counts for every number, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyReport {
    pub draws: usize,
    pub entries: Vec<NumberFrequency>,
}

impl FrequencyReport {
    pub fn count_of(&self, number: u8) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.number == number)
            .map(|entry| entry.count)
    }
}
