/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod album;
pub mod api;
pub mod client;
pub mod errors;
pub mod parsers;
pub mod properties;
pub mod session;

pub use album::*;
pub use api::*;
pub use client::*;
pub use errors::*;
pub use properties::*;
pub use session::*;
