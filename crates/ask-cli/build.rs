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

//! Man pages of the `ask` command.

#[path = "src/cli.rs"]
mod cli;

use std::{env, fs, path::PathBuf};

use clap::{Command, CommandFactory};
use clap_mangen::Man;
use cli::Cli;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    let man_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?).join("man");
    fs::create_dir_all(&man_dir)?;
    let mut ask = Cli::command();
    // Sets the display names of the subcommands, e.g. `ask-confirm`
    ask.build();
    for command in man_page_commands(&ask) {
        let name = command
            .get_display_name()
            .unwrap_or_else(|| command.get_name());
        let mut page = Vec::new();
        Man::new(command.clone()).render(&mut page)?;
        fs::write(man_dir.join(format!("{name}.1")), page)?;
    }
    Ok(())
}

/// Return `ask` followed by its subcommands, `help` excepted.
fn man_page_commands(ask: &Command) -> Vec<&Command> {
    let mut commands = vec![ask];
    commands.extend(
        ask.get_subcommands()
            .filter(|subcommand| subcommand.get_name() != "help"),
    );
    commands
}
