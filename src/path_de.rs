use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Deserialize with JSON-path context in error messages.
///
/// `origin` names the source (file path, `<stdin>`, …) for the error.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str, origin: &str) -> Result<T> {
    let mut de = serde_json::Deserializer::from_str(src);
    let value = serde_path_to_error::deserialize::<_, T>(&mut de).map_err(|err| {
        let path = err.path().to_string();
        Error::Parse {
            origin: origin.to_string(),
            path,
            message: err.into_inner().to_string(),
        }
    })?;
    // reject trailing content after the first document
    de.end().map_err(|err| Error::Parse {
        origin: origin.to_string(),
        path: ".".to_string(),
        message: err.to_string(),
    })?;
    Ok(value)
}
