//! CLI command implementations.
//!
//! | Module   | Commands handled |
//! |----------|------------------|
//! | `play`   | `Play`           |
//! | `key`    | `Key`            |
//! | `config` | `Config`         |

pub mod config;
pub mod key;
pub mod play;

pub use config::cmd_config;
pub use key::cmd_key;
pub use play::cmd_play;
