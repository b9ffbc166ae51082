/// Errors returned by the public rendering entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{entry_point} called before the drawing host was initialized")]
    NotInitialized { entry_point: &'static str },
}
