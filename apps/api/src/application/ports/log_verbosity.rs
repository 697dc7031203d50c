/// Runtime switch between normal and debug logging.
pub trait LogVerbosity: Send + Sync {
    fn set_debug(&self, enabled: bool);
}
