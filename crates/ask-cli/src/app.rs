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

//! Application.

use std::{
    io::{self, Stderr, StdinLock},
    process::ExitCode,
};

use ask::{
    Prompter, Validator,
    validators::{InRange, NonEmpty, OneOf},
};
use clap::Parser;
use eyre::{Result, WrapErr, bail};
use log::{LevelFilter, debug, info};

use crate::cli::{Cli, Command, ConfirmArgs, NumberArgs, TextArgs};

/// Application.
#[derive(Clone, Debug)]
pub struct App {
    /// Write questions to the standard output instead of the standard error.
    stdout: bool,
}

impl App {
    /// Exit status of the `confirm` command for a no.
    pub const NO_STATUS: u8 = 1;

    /// Exit status on error.
    ///
    /// Distinct from [App::NO_STATUS].
    pub const ERROR_STATUS: u8 = 2;

    pub fn run() -> Result<ExitCode> {
        let cli = Cli::parse();
        init_logger(cli.verbose);
        let app = App { stdout: cli.stdout };
        match &cli.command {
            Command::Text(args) => app.text(args),
            Command::Confirm(args) => app.confirm(args),
            Command::Number(args) => app.number(args),
        }
    }

    fn text(&self, args: &TextArgs) -> Result<ExitCode> {
        let TextArgs {
            non_empty,
            choices,
            ignore_case,
            question,
        } = args;
        let answer = if !choices.is_empty() {
            let validator = OneOf::new(choices).ignore_case(*ignore_case);
            let answer = self
                .ask_while(question, &validator)
                .wrap_err("cannot prompt")?;
            // Print the choice as specified
            match validator.find(&answer) {
                Some(choice) => choice.to_string(),
                None => answer,
            }
        } else if *non_empty {
            self.ask_while(question, &NonEmpty::default())
                .wrap_err("cannot prompt")?
        } else {
            self.ask(question).wrap_err("cannot prompt")?
        };
        info!("answer accepted");
        println!("{answer}");
        Ok(ExitCode::SUCCESS)
    }

    fn confirm(&self, args: &ConfirmArgs) -> Result<ExitCode> {
        let ConfirmArgs { question } = args;
        let confirmed = self.ask_confirm(question).wrap_err("cannot prompt")?;
        info!("confirmed: {confirmed}");
        Ok(if confirmed {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(Self::NO_STATUS)
        })
    }

    fn number(&self, args: &NumberArgs) -> Result<ExitCode> {
        let NumberArgs { min, max, question } = args;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                bail!("minimum {min} is greater than maximum {max}");
            }
        }
        let mut validator = InRange::new();
        if let Some(min) = min {
            validator = validator.min(*min);
        }
        if let Some(max) = max {
            validator = validator.max(*max);
        }
        debug!("asking for a number in {validator:?}");
        let answer = self
            .ask_while(question, &validator)
            .wrap_err("cannot prompt")?;
        let number: i64 = validator
            .parse(&answer)
            .map_err(|message| eyre::eyre!(message))
            .wrap_err("invalid number")?;
        info!("answer accepted");
        println!("{number}");
        Ok(ExitCode::SUCCESS)
    }

    // NOTE: With `--stdout`, the library's stdio functions are used as is

    fn ask(&self, question: &str) -> ask::Result<String> {
        if self.stdout {
            ask::ask(question)
        } else {
            prompter().ask(question)
        }
    }

    fn ask_while<V>(&self, question: &str, validator: &V) -> ask::Result<String>
    where
        V: Validator + ?Sized,
    {
        if self.stdout {
            ask::ask_while(question, validator)
        } else {
            prompter().ask_while(question, validator)
        }
    }

    fn ask_confirm(&self, question: &str) -> ask::Result<bool> {
        if self.stdout {
            ask::confirm(question)
        } else {
            prompter().confirm(question)
        }
    }
}

/// Create a prompter on the standard error and the standard input.
fn prompter() -> Prompter<Stderr, StdinLock<'static>> {
    Prompter::new(io::stderr(), io::stdin().lock())
}

fn init_logger(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .init();
}

/// Map `-v` counts to the appropriate log level.
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Error,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        3.. => LevelFilter::Trace,
    }
}
