//! Purpose: Define the stable public Rust API boundary for gantry.
//! Exports: Protocol types and operations needed by the binary and tests.
//! Role: Public, additive-only surface; hides parser internals.
//! Invariants: This module is the only public path embedders should rely on.
//! Invariants: The JSON parse boundary stays private behind the protocol core.

pub use crate::core::error::{Error, ErrorKind, to_exit_code};
pub use crate::core::options::{
    CreateApiOptions, DEFAULT_DOMAIN, DEFAULT_LICENSE, InitOptions, LICENSE_APACHE2,
};
pub use crate::core::scaffold::{LICENSE_PATH, MAIN_PATH, types_path};
pub use crate::core::universe::Universe;
pub use crate::protocol::{
    CMD_CREATE_API, CMD_INIT, Request, Response, decode_request, dispatch, encode_response, run,
};
