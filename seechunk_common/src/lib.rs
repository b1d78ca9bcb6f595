pub mod border;
pub mod config;
pub mod entity;
pub mod math;
pub mod messages;
pub mod particle;
pub mod relation;
pub mod text;

use anyhow::Context;
use serde::de::DeserializeOwned;
use std::{
    fs,
    path::Path,
};

/// Blocking IO, must not be used directly in async
pub fn read_ron_file<T>(path: impl AsRef<Path> + std::fmt::Debug) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let string =
        fs::read_to_string(path.as_ref()).with_context(|| format!("reading {:?}", &path))?;
    let data = ron::from_str::<T>(&string).with_context(|| format!("parsing {:?}", &path))?;

    Ok(data)
}
