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

//! Errors.

use std::io;

use thiserror::Error;

/// Error raised while prompting.
///
/// A rejected answer is not an error: it makes the prompt loop ask again.
#[derive(Debug, Error)]
pub enum Error {
    /// The question or a rejection message could not be written to the output.
    #[error("cannot write to the output")]
    Write(#[source] io::Error),

    /// The answer could not be read from the input.
    ///
    /// This includes reaching the end of the input before the end of a line.
    #[error("cannot read the answer")]
    Read(#[source] io::Error),
}

impl Error {
    /// Return the underlying I/O error.
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Write(err) | Self::Read(err) => err,
        }
    }
}

/// Result with an [Error].
pub type Result<T> = std::result::Result<T, Error>;
