//! Top-level flow of one wrapper invocation

use crate::areas::config::Settings;
use crate::areas::multiplexer::{Multiplexer, Route};
use crate::areas::pager::ActivePager;
use crate::areas::svn::Svn;
use crate::artifacts::classify::Classifier;
use crate::artifacts::core::error::{FAILURE_EXIT_CODE, WrapperError};
use crate::artifacts::core::sink::Sink;
use crate::artifacts::operation::NON_INTERACTIVE_OPTION;
use crate::artifacts::operation::alias::AliasResolver;
use crate::artifacts::operation::invocation::CommandLine;
use derive_new::new;
use is_terminal::IsTerminal;
use std::ffi::OsString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorWhen {
    /// Colorize when standard output is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    pub fn resolve(self, stdout_is_terminal: bool) -> bool {
        match self {
            ColorWhen::Auto => stdout_is_terminal,
            ColorWhen::Always => true,
            ColorWhen::Never => false,
        }
    }
}

/// What the operator asked for: the svn command line and the color mode
#[derive(Debug, Clone, new)]
pub struct Launch {
    pub args: Vec<OsString>,
    pub color: ColorWhen,
}

/// Runs one invocation and returns the process exit code.
pub async fn run(launch: Launch, settings: &Settings) -> anyhow::Result<i32> {
    let stdout_is_terminal = std::io::stdout().is_terminal();
    let colorize = launch.color.resolve(stdout_is_terminal);
    colored::control::set_override(colorize);

    let CommandLine {
        operation,
        mut options,
    } = CommandLine::parse(launch.args);
    let multiplexer = Multiplexer::new(settings.svn_program.clone());

    let Some(token) = operation else {
        tracing::debug!("no subcommand, handing over to svn");
        let outcome = multiplexer
            .run(Route::inherit(), Route::inherit(), &options)
            .await?;
        return Ok(outcome.exit_code());
    };

    let config = settings.load_config()?;
    let operation = match AliasResolver::new(&config.aliases).resolve(&token) {
        Ok(operation) => operation,
        Err(error) => {
            eprint!("{}", error.report());
            return Ok(FAILURE_EXIT_CODE);
        }
    };

    let pager = match &settings.pager {
        Some(choice) if stdout_is_terminal && !operation.is_interactive() => {
            Some(ActivePager::start(choice)?)
        }
        _ => None,
    };
    let (out, err) = match &pager {
        Some(pager) => {
            options.insert(0, OsString::from(NON_INTERACTIVE_OPTION));
            (pager.sink(), pager.sink())
        }
        None => (Sink::stdout(), Sink::stderr()),
    };

    let svn = Svn::new(multiplexer, Some(out), Some(err), colorize);
    let outcome = svn.execute(operation, options).await;
    drop(svn);

    if let Some(pager) = pager {
        pager.finish()?;
    }

    Ok(outcome?.exit_code())
}

/// Prints a wrapper failure on standard error and returns the exit code.
pub fn report_failure(error: &anyhow::Error) -> i32 {
    eprint!("{}", failure_report(error));
    FAILURE_EXIT_CODE
}

pub fn failure_report(error: &anyhow::Error) -> String {
    if let Some(spawn_failure @ WrapperError::SpawnFailed { .. }) =
        error.downcast_ref::<WrapperError>()
    {
        return format!("svn-color: {spawn_failure}\n");
    }

    format!("ERROR, UNEXPECTED EXCEPTION\n{error}\n{error:?}\n")
        .lines()
        .map(|line| format!("{}\n", Classifier::Stderr.classify(line)))
        .collect()
}
