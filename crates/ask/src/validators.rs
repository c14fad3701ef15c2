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

//! Ready-made validators.

use std::{fmt::Display, str::FromStr};

use crate::{Validation, Validator};

/// Validator of y/n answers.
///
/// Accepts `y` and `n`, ignoring case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YesNo;

impl YesNo {
    /// Rejection message.
    pub const MESSAGE: &'static str = "please confirm or infirm by typing 'y' or 'n'";

    /// Return whether the given answer is a yes.
    pub fn is_yes(answer: &str) -> bool {
        answer.eq_ignore_ascii_case("y")
    }

    /// Return whether the given answer is a no.
    pub fn is_no(answer: &str) -> bool {
        answer.eq_ignore_ascii_case("n")
    }
}

impl Validator for YesNo {
    fn validate(&self, answer: &str) -> Validation {
        if Self::is_yes(answer) || Self::is_no(answer) {
            Validation::Accepted
        } else {
            Validation::rejected(Self::MESSAGE)
        }
    }
}

/// Validator of non-empty answers.
///
/// An answer made only of whitespace is empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonEmpty {
    message: String,
}

impl NonEmpty {
    /// Rejection message.
    pub const MESSAGE: &'static str = "please type a non-empty answer";

    /// Create a validator with the given rejection message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for NonEmpty {
    fn default() -> Self {
        Self::with_message(Self::MESSAGE)
    }
}

impl Validator for NonEmpty {
    fn validate(&self, answer: &str) -> Validation {
        if answer.trim().is_empty() {
            Validation::rejected(&self.message)
        } else {
            Validation::Accepted
        }
    }
}

/// Validator of answers among a fixed set of choices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OneOf {
    choices: Vec<String>,
    ignore_case: bool,
}

impl OneOf {
    /// Create a validator accepting exactly the given choices.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            ignore_case: false,
        }
    }

    /// Set whether case is ignored when comparing the answer to the choices.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Return the choices.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Return the choice matching the given answer, if any.
    pub fn find(&self, answer: &str) -> Option<&str> {
        let answer_lowercase = self.ignore_case.then(|| answer.to_lowercase());
        self.choices
            .iter()
            .find(|choice| match &answer_lowercase {
                Some(answer) => choice.to_lowercase() == *answer,
                None => *choice == answer,
            })
            .map(String::as_str)
    }
}

impl Validator for OneOf {
    fn validate(&self, answer: &str) -> Validation {
        if self.find(answer).is_some() {
            Validation::Accepted
        } else {
            Validation::Rejected(format!("please type one of: {}", self.choices.join(", ")))
        }
    }
}

/// Validator of numbers within inclusive bounds.
///
/// The answer is trimmed before being parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct InRange<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> InRange<T> {
    /// Create a validator accepting any number.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Set the minimum, inclusive.
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum, inclusive.
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T> Default for InRange<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InRange<T>
where
    T: FromStr + PartialOrd + Display,
{
    /// Parse the given answer and check it against the bounds.
    pub fn parse(&self, answer: &str) -> Result<T, String> {
        let value = answer
            .trim()
            .parse::<T>()
            .map_err(|_| "please type a number".to_string())?;
        // NOTE: Values that cannot be compared to a bound, such as NaN, are out of range
        let too_low = self.min.as_ref().is_some_and(|min| !(value >= *min));
        let too_high = self.max.as_ref().is_some_and(|max| !(value <= *max));
        if !too_low && !too_high {
            return Ok(value);
        }
        Err(match (&self.min, &self.max) {
            (Some(min), Some(max)) => format!("please type a number between {min} and {max}"),
            (Some(min), None) => format!("please type a number at least {min}"),
            (None, Some(max)) => format!("please type a number at most {max}"),
            // Unbounded ranges reject nothing
            (None, None) => "please type a number".to_string(),
        })
    }
}

impl<T> Validator for InRange<T>
where
    T: FromStr + PartialOrd + Display,
{
    fn validate(&self, answer: &str) -> Validation {
        match self.parse(answer) {
            Ok(_) => Validation::Accepted,
            Err(message) => Validation::Rejected(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        for answer in ["y", "Y", "n", "N"] {
            assert!(YesNo.validate(answer).is_accepted(), "{answer:?} rejected");
        }
        for answer in ["", "yes", "no", " y", "maybe"] {
            assert_eq!(
                YesNo.validate(answer),
                Validation::rejected(YesNo::MESSAGE),
                "{answer:?} accepted"
            );
        }
        assert!(YesNo::is_yes("Y"));
        assert!(!YesNo::is_yes("n"));
        assert!(YesNo::is_no("N"));
    }

    #[test]
    fn test_non_empty() {
        let validator = NonEmpty::default();
        assert!(validator.validate("abc").is_accepted());
        assert_eq!(validator.validate(""), Validation::rejected(NonEmpty::MESSAGE));
        assert_eq!(
            validator.validate(" \t"),
            Validation::rejected(NonEmpty::MESSAGE)
        );
    }

    #[test]
    fn test_non_empty_with_message() {
        let validator = NonEmpty::with_message("a name is required");
        assert_eq!(
            validator.validate(""),
            Validation::rejected("a name is required")
        );
    }

    #[test]
    fn test_one_of() {
        let validator = OneOf::new(["red", "green", "blue"]);
        assert!(validator.validate("green").is_accepted());
        assert_eq!(
            validator.validate("Green"),
            Validation::rejected("please type one of: red, green, blue")
        );
        assert_eq!(validator.find("blue"), Some("blue"));
    }

    #[test]
    fn test_one_of_ignore_case() {
        let validator = OneOf::new(["Red", "Green"]).ignore_case(true);
        assert!(validator.validate("GREEN").is_accepted());
        assert_eq!(validator.find("red"), Some("Red"));
        assert!(!validator.validate("blue").is_accepted());
    }

    #[test]
    fn test_in_range() {
        let validator = InRange::new().min(1).max(10);
        assert!(validator.validate("1").is_accepted());
        assert!(validator.validate(" 10 ").is_accepted());
        assert_eq!(
            validator.validate("11"),
            Validation::rejected("please type a number between 1 and 10")
        );
        assert_eq!(
            validator.validate("ten"),
            Validation::rejected("please type a number")
        );
        assert_eq!(validator.parse("7"), Ok(7));
    }

    #[test]
    fn test_in_range_half_open() {
        let validator = InRange::new().min(0_i64);
        assert!(validator.validate("123456").is_accepted());
        assert_eq!(
            validator.validate("-1"),
            Validation::rejected("please type a number at least 0")
        );
        let validator = InRange::new().max(0.5_f64);
        assert!(validator.validate("-3.5").is_accepted());
        assert_eq!(
            validator.validate("0.75"),
            Validation::rejected("please type a number at most 0.5")
        );
    }

    #[test]
    fn test_in_range_nan() {
        let validator = InRange::new().min(0.0_f64).max(1.0);
        for answer in ["NaN", "nan"] {
            assert_eq!(
                validator.validate(answer),
                Validation::rejected("please type a number between 0 and 1"),
                "{answer:?} accepted"
            );
        }
        let validator = InRange::new().max(0.5_f64);
        assert!(!validator.validate("NaN").is_accepted());
    }

    #[test]
    fn test_in_range_unbounded() {
        let validator = InRange::<u8>::default();
        assert!(validator.validate("255").is_accepted());
        assert!(!validator.validate("256").is_accepted());
    }
}
