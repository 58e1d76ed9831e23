// -*- coding: utf-8 -*-
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (C) 2025 Michael Büsch <m@bues.ch>

#![forbid(unsafe_code)]

use anyhow::{self as ah, Context as _};
use clap::Parser;
use tokid::generate_id;

#[derive(Parser, Debug, Clone)]
struct Opts {
    /// Number of identifiers to generate.
    #[arg(long, short = 'n', id = "COUNT", default_value = "1")]
    count: u32,

    /// Show version information and exit.
    #[arg(long, short = 'v')]
    version: bool,
}

fn main() -> ah::Result<()> {
    env_logger::init_from_env(
        env_logger::Env::new()
            .filter_or("TOKID_LOG", "info")
            .write_style_or("TOKID_LOG_STYLE", "auto"),
    );

    let opts = Opts::parse();

    if opts.version {
        println!("tokid version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    log::debug!("Generating {} identifier(s).", opts.count);
    for _ in 0..opts.count {
        let id = generate_id().context("Generate identifier")?;
        println!("{id}");
    }
    Ok(())
}

// vim: ts=4 sw=4 expandtab
