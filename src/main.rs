// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use fintrack::{cli, commands, config, session::SessionStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let config = config::load()?;
    let mut session = SessionStore::open()?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&config, &mut session, sub)?,
        Some(("register", sub)) => commands::auth::register(&config, &mut session, sub)?,
        Some(("logout", _)) => commands::auth::logout(&mut session)?,
        Some(("whoami", sub)) => commands::auth::whoami(&session, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&config, &session, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&config, &session, sub)?,
        Some(("analysis", sub)) => commands::analysis::handle(&config, &session, sub)?,
        Some(("config", sub)) => commands::config::handle(sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
