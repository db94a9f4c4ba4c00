/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # smugbatch
//!
//! Talks to the SmugMug 1.2.0 REST interface to log in with an account email and password,
//! list the account's albums and log out again.
//!
//! ## Features
//!
//! - Password login (`smugmug.login.withPassword`)
//! - Album listing (`smugmug.albums.get`)
//! - Logout (`smugmug.logout`), always attempted once a session id was issued
//! - Lower level pieces: field scanning of the raw responses and a pluggable
//!   [`v1::Transport`]
//!
//! The responses are not parsed as XML. Values are pulled out by field name with a small
//! `name="value"` scanner (see [`v1::parsers`]).
//!
//! ## Usage
//!
//! **You will need an API key from SmugMug prior to using the API**
//!
//! ```rust,no_run
//! use smugbatch::v1::{Client, ClientOptions, Creds};
//!
//! async fn albums(email: &str, password: &str, api_key: &str) -> anyhow::Result<()> {
//!     let client = Client::new(Creds::new(email, password), &ClientOptions::new(api_key))?;
//!     let report = client.list_albums().await;
//!     if let Some(err) = &report.logout_error {
//!         eprintln!("logout failed: {err}");
//!     }
//!     for album in report.albums? {
//!         println!("{}\t{}", album.id, album.title);
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod v1;
