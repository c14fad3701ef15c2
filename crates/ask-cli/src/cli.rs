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

//! CLI.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Ask questions from shell scripts.
///
/// Questions are written to the standard error (unless `--stdout` is specified)
/// and answers are read from the standard input,
/// so that the standard output only carries the answer.
#[derive(Clone, Debug, Parser, PartialEq)]
#[command(name = "ask", version)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(action = ArgAction::Count, global = true, long, short = 'v')]
    pub verbose: u8,

    /// Write questions to the standard output instead of the standard error.
    ///
    /// The answer is then printed after the questions on the standard output.
    #[arg(global = true, long)]
    pub stdout: bool,

    /// Command.
    #[command(subcommand)]
    pub command: Command,
}

/// Command.
#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Ask for a line of text and print it.
    #[command()]
    Text(TextArgs),

    /// Ask a y/n question.
    ///
    /// Exits with status 0 for a yes and 1 for a no.
    #[command()]
    Confirm(ConfirmArgs),

    /// Ask for an integer and print it.
    #[command()]
    Number(NumberArgs),
}

/// Arguments to the `text` command.
#[derive(Args, Clone, Debug, PartialEq)]
pub struct TextArgs {
    /// Ask again until the answer is not empty.
    #[arg(conflicts_with = "choices", long, short = 'n')]
    pub non_empty: bool,

    /// Accepted answer.
    ///
    /// Can be repeated. If specified, ask again until the answer is one of the choices.
    #[arg(long = "choice", short = 'c', value_name = "CHOICE")]
    pub choices: Vec<String>,

    /// Ignore case when comparing the answer to the choices.
    ///
    /// The choice is printed as specified, not as typed.
    #[arg(long, requires = "choices", short = 'i')]
    pub ignore_case: bool,

    /// Question.
    #[arg(value_name = "QUESTION")]
    pub question: String,
}

/// Arguments to the `confirm` command.
#[derive(Args, Clone, Debug, PartialEq)]
pub struct ConfirmArgs {
    /// Question.
    ///
    /// Suffixed with '(y/n)'.
    #[arg(value_name = "QUESTION")]
    pub question: String,
}

/// Arguments to the `number` command.
#[derive(Args, Clone, Debug, PartialEq)]
pub struct NumberArgs {
    /// Minimum, inclusive.
    #[arg(allow_negative_numbers = true, long, value_name = "MIN")]
    pub min: Option<i64>,

    /// Maximum, inclusive.
    #[arg(allow_negative_numbers = true, long, value_name = "MAX")]
    pub max: Option<i64>,

    /// Question.
    #[arg(value_name = "QUESTION")]
    pub question: String,
}
