use std::borrow::Cow;

/// Shown to every member whose border was removed because the engine stopped.
pub const SEE_CHUNK_DISABLED_ENGINE_STOP: &str = "see-chunk-disabled-engine-stop";

/// Message to be localized by the receiving side.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Translatable {
    pub key: Cow<'static, str>,
}

impl Translatable {
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self { key: key.into() }
    }
}
