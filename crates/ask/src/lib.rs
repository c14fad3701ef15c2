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

//! Ask questions on a terminal.
//!
//! A [Prompter] writes questions to an output and reads answers from an input,
//! one line per answer.
//! [Prompter::ask_while] asks again until a [Validator] accepts the answer,
//! and [Prompter::confirm] asks a y/n question.
//!
//! The free functions [ask], [ask_while] and [confirm] use the standard output and the standard input.
//!
//! ```no_run
//! use ask::validators::NonEmpty;
//!
//! let name = ask::ask_while("name", &NonEmpty::default())?;
//! if ask::confirm(format!("delete {name}?"))? {
//!     println!("deleting {name}");
//! }
//! # Ok::<(), ask::Error>(())
//! ```

mod error;
mod prompter;
mod validate;
pub mod validators;

pub use error::{Error, Result};
pub use prompter::Prompter;
pub use validate::{Validation, Validator};

/// Ask a question on the standard output and return the answer read from the standard input.
///
/// See [Prompter::ask].
pub fn ask(question: impl AsRef<str>) -> Result<String> {
    Prompter::stdio().ask(question)
}

/// Ask a question on the standard output until the given validator accepts the answer read from the standard input.
///
/// See [Prompter::ask_while].
#[doc(alias = "while")]
pub fn ask_while<V>(question: impl AsRef<str>, validator: &V) -> Result<String>
where
    V: Validator + ?Sized,
{
    Prompter::stdio().ask_while(question, validator)
}

/// Ask a y/n question on the standard output until the answer read from the standard input is `y` or `n`.
///
/// See [Prompter::confirm].
pub fn confirm(question: impl AsRef<str>) -> Result<bool> {
    Prompter::stdio().confirm(question)
}
