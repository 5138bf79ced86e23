//! Command handlers
//!
//! Each handler resolves its dependencies through the presentation factory,
//! runs a use case and renders to stdout.

mod area;
mod pay;
mod phone;
mod range;
mod todo;

pub use area::cmd_area;
pub use pay::cmd_pay;
pub use phone::cmd_phone;
pub use range::cmd_range;
pub use todo::cmd_todo;

use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::{debug, warn};

use solidkit::config::{Config, OutputFormat};
use solidkit::logging;
use solidkit::presentation::{create_renderer, Cli, Renderer};

/// Settings shared by every command, after config files, env and flags
pub struct Context {
    pub config: Config,
}

impl Context {
    /// Resolve configuration, apply CLI flags and install logging.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let resolved = Config::resolve(cli.config.as_deref())?;
        let mut config = resolved.config;

        if cli.json {
            config.output.format = OutputFormat::Json;
        }
        if let Some(precision) = cli.precision {
            config.output.precision = precision;
        }

        let level = logging::effective_level(config.logging.level, cli.verbose);
        logging::init(level, std::io::stderr().is_terminal());

        match &resolved.source {
            Some(path) => debug!(path = %path.display(), "loaded config"),
            None => debug!("no config file found; using defaults"),
        }
        for w in &resolved.warnings {
            warn!(
                key = %w.key,
                file = %w.file.display(),
                line = ?w.line,
                "unknown config key"
            );
        }
        for w in &resolved.env_warnings {
            warn!(
                var = w.var,
                value = %w.value,
                expected = w.expected,
                "ignoring invalid environment override"
            );
        }
        debug!(?config, "resolved configuration");

        Ok(Self { config })
    }

    pub fn renderer(&self) -> Box<dyn Renderer> {
        create_renderer(self.config.output.format, self.config.precision())
    }
}
