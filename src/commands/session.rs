// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::OtpFlow;
use crate::store::Store;
use anyhow::Result;

pub fn login(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    let phone = m.get_one::<String>("phone").unwrap();
    let code = m.get_one::<String>("code").unwrap();

    let mut flow = OtpFlow::new();
    flow.request_code(phone)?;
    let identity = flow.verify(code)?;

    store.set_current_user(Some(&identity))?;
    let profile = store.vault(&identity)?;
    match &profile.name {
        Some(name) => println!("Welcome back, {}! ({})", name, identity),
        None => println!("Logged in as {}", identity),
    }
    Ok(())
}

pub fn logout(store: &Store) -> Result<()> {
    store.set_current_user(None)?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(store: &Store) -> Result<()> {
    match store.current_user()? {
        Some(phone) => println!("{}", phone),
        None => println!("Not logged in"),
    }
    Ok(())
}
