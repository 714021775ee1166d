//! Command-line plumbing shared by the binaries.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use env_logger::Builder;
use log::{debug, warn, LevelFilter};

use crate::config::{EngineConfig, ModelKind};
use crate::core::corrector::Corrector;
use crate::core::engine::KeyboardSession;
use crate::core::types::SuggestionKind;
use crate::error::Result;

/// Flags that choose and tune the next-word model.
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// JSON config file; flags below override it
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Next-word source
    #[arg(long, value_enum, global = true)]
    pub model: Option<ModelArg>,

    /// Maximum predictions from the trained model
    #[arg(long, global = true)]
    pub max_suggestions: Option<usize>,

    /// Bincode model snapshot to load (implies --model trained)
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelArg {
    Static,
    Trained,
}

impl From<ModelArg> for ModelKind {
    fn from(arg: ModelArg) -> Self {
        match arg {
            ModelArg::Static => ModelKind::Static,
            ModelArg::Trained => ModelKind::Trained,
        }
    }
}

impl EngineArgs {
    /// 0 = quiet, 1 = default, 2 = verbose, 3+ = very verbose
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }

    /// The config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_file(path)?,
            None => EngineConfig::default(),
        };
        if let Some(model) = self.model {
            config.model = model.into();
        }
        if let Some(max) = self.max_suggestions {
            config.max_suggestions = max;
        }
        if let Some(snapshot) = &self.snapshot {
            config.snapshot = Some(snapshot.clone());
            if self.model.is_none() {
                config.model = ModelKind::Trained;
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn build_session(&self) -> Result<KeyboardSession> {
        let predictor = self.resolve_config()?.build_predictor()?;
        Ok(KeyboardSession::new(predictor, Corrector::new()))
    }
}

/// Logs go to stderr so stdout stays free for output and protocol lines.
pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    let _ = Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init();
}

/// Runs the simulator line protocol until `EXIT` or end of input.
///
/// Commands: `INPUT <text>` (trailing spaces kept), `KEY <char>`, `BACKSPACE`,
/// `SELECT <n>` (1-based), `SUBMIT`, `EXIT`.
pub fn run_protocol(
    session: &mut KeyboardSession,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        debug!("<- {:?}", line);
        let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        match command {
            "INPUT" => {
                session.set_input(rest);
                update_view(session, &mut out)?;
            }
            "KEY" => match rest.chars().next() {
                Some(c) => {
                    session.push_char(c);
                    update_view(session, &mut out)?;
                }
                None => reply(&mut out, "ERROR KEY needs a character")?,
            },
            "BACKSPACE" => {
                session.backspace();
                update_view(session, &mut out)?;
            }
            "SELECT" => match rest.trim().parse::<usize>() {
                Ok(n) if n > 0 => match session.apply_suggestion(n - 1) {
                    Ok(()) => update_view(session, &mut out)?,
                    Err(e) => reply(&mut out, &format!("ERROR {e}"))?,
                },
                _ => reply(&mut out, "ERROR SELECT needs a positive number")?,
            },
            "SUBMIT" => match session.submit() {
                Some(message) => {
                    reply(&mut out, &format!("MESSAGE {}", message))?;
                    update_view(session, &mut out)?;
                }
                None => reply(&mut out, "IGNORED")?,
            },
            "EXIT" => break,
            _ => {
                warn!("unknown command {:?}", command);
                reply(&mut out, &format!("ERROR unknown command {}", command))?;
            }
        }
    }
    Ok(())
}

fn reply(out: &mut impl Write, line: &str) -> io::Result<()> {
    debug!("-> {:?}", line);
    writeln!(out, "{}", line)?;
    out.flush()
}

fn update_view(session: &KeyboardSession, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "INPUT {}", session.input())?;

    if session.suggestions().is_empty() {
        writeln!(out, "HIDE_SUGGESTIONS")?;
    } else {
        for (i, suggestion) in session.suggestions().iter().enumerate() {
            let kind = match suggestion.kind {
                SuggestionKind::Prediction => "prediction",
                SuggestionKind::Correction => "correction",
            };
            writeln!(out, "SUGGESTION {} {} {}", i + 1, kind, suggestion.word)?;
        }
        writeln!(out, "SHOW_SUGGESTIONS")?;
    }
    out.flush()
}
