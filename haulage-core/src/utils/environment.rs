use std::fmt;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the solver.
/// It is shared between threads when several problems are solved in parallel.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences how the solver reports
/// its progress.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment` with the given logger.
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger }
    }

    /// Creates a new instance of `Environment` which discards all log messages.
    pub fn new_silent() -> Self {
        Self { logger: Arc::new(|_: &str| {}) }
    }

    /// Passes a message to the logger.
    pub fn log(&self, message: &str) {
        (self.logger)(message)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(|msg: &str| println!("{msg}")))
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment").finish_non_exhaustive()
    }
}
