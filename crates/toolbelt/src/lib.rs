//! toolbelt — small developer utilities behind one CLI.
//!
//! Each module is a pure transformation with a `Result` API; the `cli`
//! module wires them to subcommands of the `toolbelt` binary. The CDC
//! diff engine itself lives in the `cdc-diff` crate; this crate only
//! renders its output.

pub mod basic_auth;
pub mod cli;
pub mod codec;
pub mod cron;
pub mod diff_render;
pub mod epoch;
pub mod json_env;
pub mod json_fmt;
pub mod jwt;
pub mod md5;
pub mod passwd;
pub mod text_stats;

pub use diff_render::render_table;
pub use md5::md5_hex;
pub use text_stats::{analyze, TextStats};
