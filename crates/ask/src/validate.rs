// Copyright 2025 Laurent Pireyn
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Validation of answers.

/// Outcome of the validation of an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// The answer is accepted.
    Accepted,

    /// The answer is rejected, with a message telling the user what to type instead.
    Rejected(String),
}

impl Validation {
    /// Create a rejection with the given message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }

    /// Return whether the answer is accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Convert an `(accepted, message)` pair.
///
/// The message is discarded if the answer is accepted.
impl From<(bool, String)> for Validation {
    fn from((accepted, message): (bool, String)) -> Self {
        if accepted {
            Self::Accepted
        } else {
            Self::Rejected(message)
        }
    }
}

/// Validator of answers.
///
/// Any `Fn(&str) -> Validation` closure is a validator:
///
/// ```
/// use ask::{Validation, Validator};
///
/// let validator = |answer: &str| {
///     if answer.len() <= 8 {
///         Validation::Accepted
///     } else {
///         Validation::rejected("please type at most 8 characters")
///     }
/// };
/// assert!(validator.validate("short").is_accepted());
/// assert!(!validator.validate("far too long").is_accepted());
/// ```
pub trait Validator {
    /// Validate the given answer.
    fn validate(&self, answer: &str) -> Validation;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Validation,
{
    fn validate(&self, answer: &str) -> Validation {
        self(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pair() {
        assert_eq!(
            Validation::from((true, "ignored".to_string())),
            Validation::Accepted
        );
        assert_eq!(
            Validation::from((false, "try again".to_string())),
            Validation::rejected("try again")
        );
    }

    #[test]
    fn test_closure_validator() {
        let validator =
            |answer: &str| -> Validation { (answer == "yes", "try again".to_string()).into() };
        assert!(validator.validate("yes").is_accepted());
        assert_eq!(validator.validate("no"), Validation::rejected("try again"));
    }

    #[test]
    fn test_dyn_validator() {
        let validator: &dyn Validator = &|_: &str| Validation::Accepted;
        assert!(validator.validate("anything").is_accepted());
    }
}
