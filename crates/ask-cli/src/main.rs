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

mod app;
mod cli;

use std::process::ExitCode;

use eyre::Result;

use crate::app::App;

fn main() -> ExitCode {
    let result = init_eyre().and_then(|()| App::run());
    match result {
        Ok(exit_code) => exit_code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(App::ERROR_STATUS)
        }
    }
}

fn init_eyre() -> Result<()> {
    color_eyre::config::HookBuilder::default()
        .display_env_section(false)
        .install()?;
    Ok(())
}
