// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::config;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let cfg = config::load()?;
            println!("Config file: {}", config::config_path()?.display());
            println!("API URL:     {}", cfg.api_url);
            println!("Currency:    {}", cfg.currency);
        }
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap();
            let mut cfg = config::load_stored()?;
            cfg.api_url = url.trim_end_matches('/').to_string();
            config::save(&cfg)?;
            println!("API base URL set to {}", cfg.api_url);
        }
        Some(("set-currency", sub)) => {
            let symbol = sub.get_one::<String>("symbol").unwrap();
            let mut cfg = config::load_stored()?;
            cfg.currency = symbol.clone();
            config::save(&cfg)?;
            println!("Currency symbol set to {}", cfg.currency);
        }
        _ => {}
    }
    Ok(())
}
