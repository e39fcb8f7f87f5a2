use clap::Parser;
use std::ffi::OsString;
use svn_color::app::{self, ColorWhen, Launch};
use svn_color::areas::config::Settings;

#[derive(Parser)]
#[command(
    name = "svn-color",
    version = "0.1.0",
    about = "Colorizing wrapper around the Subversion command-line client",
    long_about = "Runs svn with the given arguments and colorizes its output \
    according to the subcommand. Everything after the wrapper's own options \
    is handed to svn untouched, so `svn-color help` is svn's help.",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(
        long,
        value_enum,
        default_value_t = ColorWhen::Auto,
        help = "When to colorize svn output"
    )]
    color: ColorWhen,
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, help = "svn subcommand and options")]
    args: Vec<OsString>,
}

#[tokio::main]
async fn main() {
    svn_color::logging::init_tracing();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    let code = match app::run(Launch::new(cli.args, cli.color), &settings).await {
        Ok(code) => code,
        Err(error) => {
            tracing::debug!(error = ?error, "invocation failed");
            app::report_failure(&error)
        }
    };

    std::process::exit(code);
}
