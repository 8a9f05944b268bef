/// Outbound channel to the rendering layer.
///
/// Receives one complete snapshot per update. Emission is synchronous so local
/// edits never suspend the caller.
pub trait ViewStatePort<S>: Send + Sync {
    fn emit(&self, state: S);
}
