/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use strum_macros::{Display, EnumString, IntoStaticStr};

/// REST methods used by the session pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
pub enum ApiMethod {
    #[strum(serialize = "smugmug.login.withPassword")]
    LoginWithPassword,
    #[strum(serialize = "smugmug.albums.get")]
    AlbumsGet,
    #[strum(serialize = "smugmug.logout")]
    Logout,
}

/// Where a [`crate::v1::Session`] is in its login, list, logout run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum SessionState {
    Unauthenticated,
    Authenticating,
    Authenticated,
    ListingAlbums,
    AlbumsListed,
    LoggingOut,
    Closed,
    Failed,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Failed)
    }
}
