use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use anyhow::Context;

use crate::error::{MlError, Result};

/// Models that persist as a single line of whitespace-separated values.
///
/// Implementors provide the text encoding; file handling comes for free.
pub trait TextModel: Sized {
    fn to_text(&self) -> String;

    fn from_text(text: &str) -> Result<Self>;

    /// Human readable name used in log messages.
    fn name(&self) -> &str {
        "model"
    }

    /// Write the model to `path`, replacing any existing file.
    ///
    /// An unopenable path is logged and returned as an error; nothing is
    /// written in that case.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_text())
            .map_err(|e| {
                log::error!("Unable to open {} for writing: {}", path.display(), e);
                e
            })
            .with_context(|| format!("Failed to save {} to {}", self.name(), path.display()))?;
        log::debug!("Saved {} to {}", self.name(), path.display());
        Ok(())
    }

    /// Replace `self` with the model stored at `path`.
    ///
    /// On any failure `self` is left untouched.
    fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| {
                log::error!("Unable to open {} for reading: {}", path.display(), e);
                e
            })
            .with_context(|| format!("Failed to open model file: {}", path.display()))?;
        let loaded = Self::from_text(&text)
            .with_context(|| format!("Invalid model file: {}", path.display()))?;
        *self = loaded;
        log::debug!("Loaded {} from {}", self.name(), path.display());
        Ok(())
    }
}

/// Sequential reader over the whitespace-separated fields of a model record.
pub(crate) struct Fields<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            inner: text.split_whitespace(),
        }
    }

    pub(crate) fn next<T: FromStr>(&mut self, field: &str) -> Result<T> {
        let token = self
            .inner
            .next()
            .ok_or_else(|| MlError::Parse(format!("missing field '{}'", field)))?;
        token
            .parse::<T>()
            .map_err(|_| MlError::Parse(format!("invalid value '{}' for field '{}'", token, field)))
    }

    pub(crate) fn finish(mut self) -> Result<()> {
        match self.inner.next() {
            None => Ok(()),
            Some(extra) => Err(MlError::Parse(format!(
                "unexpected trailing value '{}'",
                extra
            ))),
        }
    }
}
