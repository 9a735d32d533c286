//! Acquisition of the character source

use std::fs;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::Scanner;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot read {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{name} is not valid UTF-8")]
    InvalidUtf8 { name: String },
}

/// The complete text of one program, read up front so that acquisition
/// failures surface before any token is produced.
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    text: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let file = fs::File::open(path).map_err(|source| SourceError::Io {
            name: name.clone(),
            source,
        })?;
        Self::from_reader(name, file)
    }

    pub fn from_reader(name: impl Into<String>, mut reader: impl Read) -> Result<Self, SourceError> {
        let name = name.into();
        let mut bytes = Vec::new();
        if let Err(source) = reader.read_to_end(&mut bytes) {
            return Err(SourceError::Io { name, source });
        }
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { name, text }),
            Err(_) => Err(SourceError::InvalidUtf8 { name }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.text)
    }
}
