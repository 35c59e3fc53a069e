/// Startup loading indicator.
pub trait LoadingIndicatorPort: Send + Sync {
    fn show(&self);
    fn clear(&self);
}
