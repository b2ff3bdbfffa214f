//! Load struct fields from a `.env` file and the process environment
//!
//! `envcfg` fills the fields of an existing struct in place. Values come from
//! two layered sources:
//!
//! 1. a `.env` file (optional; a missing file is skipped),
//! 2. the process environment, which overrides the file.
//!
//! Fields whose key is found in neither source keep whatever value the
//! struct already had, so defaults are just the values you construct it with.
//!
//! # Example
//!
//! ```rust
//! use envcfg::{EnvCfg, Loader};
//!
//! #[derive(Debug, EnvCfg)]
//! struct Config {
//!     #[env(name = "DEBUG")]
//!     pub debug: bool,
//!
//!     #[env(name = "DATABASE_URL")]
//!     pub database_url: String,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut config = Config {
//!     debug: false,
//!     database_url: "sqlite:///db.sqlite".to_string(),
//! };
//!
//! // `envcfg::load(&mut config)` reads `./.env` and the process environment.
//! // Here the environment is given explicitly.
//! Loader::new()
//!     .environment(["DEBUG=true"])
//!     .load(&mut config)?;
//!
//! assert!(config.debug);
//! assert_eq!(config.database_url, "sqlite:///db.sqlite");
//! # Ok(())
//! # }
//! ```
//!
//! # The `.env` format
//!
//! ```text
//! # comment
//! KEY=value
//!  KEY2 = value with internal spaces
//! ```
//!
//! - Each line is `KEY=VALUE`, split on the first `=`
//! - Whitespace around the key and the value is stripped
//! - Blank lines and lines starting with `#` are ignored
//! - No quoting, escaping, multi-line values, or variable expansion
//!
//! # Attributes
//!
//! ## `#[env(name = "KEY")]`
//!
//! Bind a field to `KEY`. Only `pub` fields are bound; private fields are
//! skipped even when annotated.
//!
//! ## Nested structs
//!
//! A `pub` field whose type also derives `EnvCfg` is recursed into. Its own
//! fields bind exactly as if they were declared on the outer struct.
//!
//! ```rust
//! # use envcfg::{EnvCfg, Loader};
//! #[derive(Default, EnvCfg)]
//! pub struct Database {
//!     #[env(name = "DB_HOST")]
//!     pub host: String,
//! }
//!
//! #[derive(Default, EnvCfg)]
//! pub struct Config {
//!     pub database: Database,
//! }
//! # fn main() -> anyhow::Result<()> {
//! # let mut config = Config::default();
//! # Loader::new().environment(["DB_HOST=db.internal"]).load(&mut config)?;
//! # assert_eq!(config.database.host, "db.internal");
//! #     Ok(())
//! # }
//! ```
//!
//! ## `#[env(skip)]`
//!
//! Leave a `pub` field out of collection entirely. Every other `pub` field's
//! type must implement [`Bindable`], so use this for fields of types that
//! do not.
//!
//! # Supported types
//!
//! | Type | Accepted values |
//! |---|---|
//! | `bool` | `1 t T TRUE true True`, `0 f F FALSE false False` |
//! | `i8` … `i128`, `isize` | base-10, range-checked |
//! | `u8` … `u128`, `usize` | base-10, non-negative, range-checked |
//! | `f32`, `f64` | decimal or exponent form, `inf`, `nan` |
//! | `String` | anything |
//!
//! `char`, `Option<T>`, `Vec<T>`, arrays, `Box<T>`, maps and `PathBuf` can be
//! declared but fail with [`Error::UnsupportedFieldType`] when their key is
//! present.

mod de;
mod error;
pub mod field;
mod loader;
pub mod source;

pub use envcfg_derive::EnvCfg;
pub use error::{Error, Result};
pub use field::{Bindable, EnvCfg, FieldDescriptor, Slot};
pub use loader::{bind, collect, load, load_file, Loader, DEFAULT_FILE_NAME};
