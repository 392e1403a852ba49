use crate::core::constants::LOG_FILE;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::path::Path;

/// Variable holding the log filter, e.g. `CLUMSY_LOG=debug`.
pub const LOG_ENV: &str = "CLUMSY_LOG";

/// Initializes the global logger, appending to `clumsy.log` in `dir`.
///
/// The terminal belongs to the game, so logs never go to stderr. If the file
/// cannot be opened, logging stays disabled.
pub fn init(dir: &Path) {
    let file = fs::create_dir_all(dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
    });
    let Ok(file) = file else {
        return;
    };

    let env = Env::new().filter_or(LOG_ENV, "info");
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    // Fails only if a logger is already installed
    let _ = builder.try_init();
}
