use chrono::NaiveDateTime;
use thiserror::Error;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Non-positive (or `NaN`) charging rate, there is no meaningful charging duration for it.
    #[error("Charging rate must be greater than zero.")]
    InvalidRate,

    /// Neither the remaining range nor the state of charge carries a usable value.
    #[error("You have to at least provide remaining kilometers or remaining percentage")]
    MissingInput,

    #[error("`{0}` is not a valid time of day, expected `H:MM`")]
    InvalidTimeOfDay(String),

    #[error("`{0}` does not exist in the target time zone")]
    NonexistentLocalTime(NaiveDateTime),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_ok() {
        assert_eq!(Error::InvalidRate.to_string(), "Charging rate must be greater than zero.");
        assert_eq!(
            Error::MissingInput.to_string(),
            "You have to at least provide remaining kilometers or remaining percentage",
        );
    }
}
