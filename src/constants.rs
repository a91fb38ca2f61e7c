// src/constants.rs
//
// Application-wide constants: network defaults and the fixed response messages
// clients match on.

/// Address the HTTP service binds to when neither the CLI nor the config file sets one.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port the HTTP service listens on by default.
///
/// Existing clients and their test suites talk to `http://localhost:4000`.
pub const DEFAULT_PORT: u16 = 4000;

/// Directory under the platform data dir that holds the default database.
///
/// Used in: `lib.rs` (`resolve_database_path`)
pub const DATA_DIR_NAME: &str = "quirknotes";

/// File name of the default database inside `DATA_DIR_NAME`.
pub const DATABASE_FILE_NAME: &str = "notes.db";

/// Response message for a successful `POST /postNote`.
///
/// The spelling is part of the wire contract; clients compare it verbatim.
pub const NOTE_ADDED_MESSAGE: &str = "Note added succesfully.";
