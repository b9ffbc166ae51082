//! Thin wrappers around [tracing](https://docs.rs/tracing) events, so that call sites don't need
//! `#[cfg(feature = "tracing")]` sprinkled over them. Without the feature, these expand to nothing
//! (arguments aren't evaluated).

macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub(crate) use {debug, trace};
