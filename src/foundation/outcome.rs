use std::fmt;

use crate::foundation::error::{JourneyError, JourneyResult};

const FALLBACK_REASON: &str = "something went wrong";

/// Non-empty failure description carried by [`Outcome::Failure`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureReason(String);

impl FailureReason {
    /// Build a reason from `msg`, rejecting empty or whitespace-only messages.
    pub fn new(msg: impl Into<String>) -> JourneyResult<Self> {
        let msg = msg.into();
        if msg.trim().is_empty() {
            return Err(JourneyError::validation(
                "a failing outcome needs a non-empty error message",
            ));
        }
        Ok(Self(msg))
    }

    /// Build a reason from `msg`, substituting a generic message when it is empty.
    pub fn from_message(msg: impl Into<String>) -> Self {
        Self::new(msg).unwrap_or_else(|_| Self(FALLBACK_REASON.to_string()))
    }

    /// Borrow the message.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Success/failure value container.
///
/// Exactly one of "success with a value" or "failure with a non-empty message"
/// holds; both are encoded in the variant, so neither "both" nor "neither" can be
/// constructed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Operation succeeded with a value.
    Success(T),
    /// Operation failed with a reason.
    Failure(FailureReason),
}

impl<T> Outcome<T> {
    /// Wrap a successful value.
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap a failure message (empty messages are replaced by a generic one).
    pub fn failure(msg: impl Into<String>) -> Self {
        Self::Failure(FailureReason::from_message(msg))
    }

    /// `true` for [`Outcome::Success`].
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` for [`Outcome::Failure`].
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the value of a successful outcome.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the reason of a failed outcome.
    pub fn error(&self) -> Option<&FailureReason> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    /// Convert into a standard `Result`.
    pub fn into_result(self) -> Result<T, FailureReason> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Failure(reason) => Err(reason),
        }
    }

    /// Take the value out, turning a failure into a [`JourneyError::Validation`].
    pub fn into_value(self) -> JourneyResult<T> {
        self.into_result().map_err(|reason| {
            JourneyError::validation(format!(
                "cannot retrieve the value from a failed outcome: {reason}"
            ))
        })
    }

    /// Map the success value, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(v) => Outcome::Success(f(v)),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }
}

impl Outcome<()> {
    /// Return the first failure in `outcomes`, or `Success(())` when all succeeded.
    pub fn combine<'a, U: 'a>(outcomes: impl IntoIterator<Item = &'a Outcome<U>>) -> Self {
        for outcome in outcomes {
            if let Outcome::Failure(reason) = outcome {
                return Outcome::Failure(reason.clone());
            }
        }
        Outcome::Success(())
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(r: Result<T, E>) -> Self {
        match r {
            Ok(v) => Self::Success(v),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/outcome.rs"]
mod tests;
