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

//! Prompter.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::{debug, trace};

use crate::{Error, Result, Validation, Validator, validators::YesNo};

/// Prompter writing questions to an output and reading answers from an input.
///
/// The prompter does not close its endpoints; [Prompter::into_inner] gives them back.
#[derive(Debug)]
pub struct Prompter<W, R> {
    output: W,
    input: R,
}

impl Prompter<Stdout, StdinLock<'static>> {
    /// Create a prompter on the standard output and the standard input.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stdin().lock())
    }
}

impl<W, R> Prompter<W, R> {
    /// Create a prompter on the given output and input.
    pub fn new(output: W, input: R) -> Self {
        Self { output, input }
    }

    /// Return the output and the input of this prompter.
    pub fn into_inner(self) -> (W, R) {
        (self.output, self.input)
    }
}

impl<W, R> Prompter<W, R>
where
    W: Write,
    R: BufRead,
{
    /// Ask a question and return the answer.
    ///
    /// The question is written as `<question>: `, then one line is read.
    /// The answer is that line without its line terminator.
    ///
    /// # Errors
    ///
    /// [Error::Write] if the question cannot be written, in which case nothing is read.
    /// [Error::Read] if the line cannot be read, including when the input ends before the end of the line.
    pub fn ask(&mut self, question: impl AsRef<str>) -> Result<String> {
        let question = question.as_ref();
        debug!("asking {question:?}");
        self.write(&format!("{question}: "))?;
        let answer = self.read_line()?;
        trace!("answer to {question:?}: {answer:?}");
        Ok(answer)
    }

    /// Ask a question until the given validator accepts the answer, and return that answer.
    ///
    /// After each rejected answer, the rejection message is written on its own line
    /// and the question is asked again.
    /// There is no limit to the number of attempts.
    ///
    /// # Errors
    ///
    /// Any error from [Prompter::ask], or [Error::Write] if a rejection message cannot be written.
    /// Prompting stops at the first error.
    #[doc(alias = "while")]
    pub fn ask_while<V>(&mut self, question: impl AsRef<str>, validator: &V) -> Result<String>
    where
        V: Validator + ?Sized,
    {
        let question = question.as_ref();
        loop {
            let answer = self.ask(question)?;
            match validator.validate(&answer) {
                Validation::Accepted => return Ok(answer),
                Validation::Rejected(message) => {
                    debug!("answer to {question:?} rejected: {message}");
                    self.write(&format!("{message}\n"))?;
                }
            }
        }
    }

    /// Ask a y/n question until the answer is `y` or `n`, ignoring case.
    ///
    /// The question is suffixed with ` (y/n)`.
    /// Return `true` for a yes and `false` for a no.
    ///
    /// # Errors
    ///
    /// Any error from [Prompter::ask_while].
    pub fn confirm(&mut self, question: impl AsRef<str>) -> Result<bool> {
        let question = format!("{} (y/n)", question.as_ref());
        let answer = self.ask_while(&question, &YesNo)?;
        Ok(YesNo::is_yes(&answer))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(Error::Write)
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::with_capacity(16);
        self.input.read_line(&mut line).map_err(Error::Read)?;
        // NOTE: A partial line at the end of the input is discarded
        if line.pop() != Some('\n') {
            return Err(Error::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "end of input before end of line",
            )));
        }
        if line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}
