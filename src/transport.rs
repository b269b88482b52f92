use crate::request::Request;

/// The network side of an invocation: signing, retries and serialization
/// to wire bytes all live behind this trait.
///
/// Errors are opaque to this crate and reach the caller unchanged, wrapped in
/// [`InvokeError::Transport`](crate::error::InvokeError::Transport).
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn send(&self, request: &Request) -> Result<serde_json::Value, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn send(&self, request: &Request) -> Result<serde_json::Value, Self::Error> {
        (**self).send(request)
    }
}
