// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::client::ApiClient;
use crate::config::Config;
use crate::models::RegisterRequest;
use crate::session::SessionStore;
use crate::utils::{maybe_print_json, pretty_table};

pub fn login(config: &Config, session: &mut SessionStore, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub.get_one::<String>("username").unwrap();
    let password = match sub.get_one::<String>("password") {
        Some(p) => p.clone(),
        None => rpassword::prompt_password("Password: ")?,
    };
    // Login itself is anonymous; the token arrives in the response.
    let api = ApiClient::new(config, None)?;
    let resp = session.login(&api, username, &password)?;
    println!("Logged in as '{}'", resp.identity.username);
    Ok(())
}

pub fn register(config: &Config, session: &mut SessionStore, sub: &clap::ArgMatches) -> Result<()> {
    let username = sub.get_one::<String>("username").unwrap();
    let email = sub.get_one::<String>("email").unwrap();
    let full_name = sub.get_one::<String>("full-name").unwrap();
    let password = match sub.get_one::<String>("password") {
        Some(p) => p.clone(),
        None => rpassword::prompt_password("Password: ")?,
    };
    if password.chars().count() < 6 {
        anyhow::bail!("Password must be at least 6 characters");
    }
    let api = ApiClient::new(config, None)?;
    let resp = session.register(
        &api,
        &RegisterRequest {
            username: username.clone(),
            email: email.clone(),
            password,
            full_name: full_name.clone(),
        },
    )?;
    println!("Registered and logged in as '{}'", resp.identity.username);
    Ok(())
}

pub fn logout(session: &mut SessionStore) -> Result<()> {
    session.logout();
    println!("Logged out.");
    Ok(())
}

pub fn whoami(session: &SessionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    match session.identity() {
        Some(identity) => {
            if !maybe_print_json(json_flag, false, identity)? {
                let rows = vec![vec![
                    identity.username.clone(),
                    identity.full_name.clone().unwrap_or_default(),
                    identity.email.clone().unwrap_or_default(),
                ]];
                println!("{}", pretty_table(&["Username", "Full Name", "Email"], rows));
            }
        }
        None => println!("Not logged in."),
    }
    Ok(())
}
