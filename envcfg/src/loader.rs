//! Entry points: collect a target's fields, then bind the file and the environment

use crate::error::{Error, Result};
use crate::field::{Bindable, FieldDescriptor, Slot};
use crate::source::{self, Vars};
use std::path::{Path, PathBuf};

/// Name of the file [`load`] reads from the current working directory
pub const DEFAULT_FILE_NAME: &str = ".env";

/// Collect the bindable fields of `target`.
///
/// Fails with [`Error::InvalidTarget`] if `target` is not a struct.
pub fn collect<T: Bindable>(target: &mut T) -> Result<Vec<FieldDescriptor<'_>>> {
    match target.slot() {
        Slot::Nested(inner) => {
            let mut fields = Vec::new();
            inner.collect_fields(&mut fields);
            tracing::debug!(event = "envcfg.fields.collected", count = fields.len());
            Ok(fields)
        }
        other => Err(Error::InvalidTarget { kind: other.kind() }),
    }
}

/// Write every field whose key is present in `vars`.
///
/// Stops at the first coercion failure; fields bound before it keep their
/// new values.
pub fn bind(fields: &mut [FieldDescriptor<'_>], vars: &Vars) -> Result<()> {
    for field in fields.iter_mut() {
        if let Some(value) = vars.get(field.key) {
            field.slot.assign(field.key, value)?;
            tracing::trace!(event = "envcfg.field.bound", key = field.key);
        }
    }
    Ok(())
}

/// Loads a struct from an optional `.env` file, then from the environment.
///
/// ```rust
/// use envcfg::{EnvCfg, Loader};
///
/// #[derive(Debug, Default, EnvCfg)]
/// struct Config {
///     #[env(name = "PORT")]
///     pub port: u16,
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// let mut config = Config::default();
/// Loader::new()
///     .environment(["PORT=8080"])
///     .load(&mut config)?;
/// assert_eq!(config.port, 8080);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Loader {
    file: Option<PathBuf>,
    environment: Option<Vec<String>>,
}

impl Loader {
    /// A loader with no file that reads the process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `path` before the environment. A missing file is skipped.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Use these `KEY=VALUE` entries instead of the process environment.
    pub fn environment<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.environment = Some(entries.into_iter().map(Into::into).collect());
        self
    }

    /// Bind the file, then the environment, into `target`.
    ///
    /// The target is validated before anything is read. The first error
    /// aborts the load; an I/O error on the file skips the environment pass.
    pub fn load<T: Bindable>(&self, target: &mut T) -> Result<()> {
        let mut fields = collect(target)?;

        if let Some(path) = &self.file {
            if let Some(vars) = source::read_file(path)? {
                bind(&mut fields, &vars)?;
            }
        }

        let vars = match &self.environment {
            Some(entries) => source::read_entries(entries.iter().cloned())?,
            None => source::read_environment()?,
        };
        bind(&mut fields, &vars)?;

        tracing::debug!(event = "envcfg.load.completed", fields = fields.len());
        Ok(())
    }
}

/// Load `target` from the file at `path`, then from the process environment.
///
/// Environment values override file values; keys found in neither leave
/// the field's current value in place. A missing file is not an error.
pub fn load_file<T: Bindable>(path: impl AsRef<Path>, target: &mut T) -> Result<()> {
    Loader::new().file(path).load(target)
}

/// Load `target` from `.env` in the current working directory, then from
/// the process environment.
pub fn load<T: Bindable>(target: &mut T) -> Result<()> {
    let dir = std::env::current_dir().map_err(Error::CurrentDir)?;
    load_file(dir.join(DEFAULT_FILE_NAME), target)
}
