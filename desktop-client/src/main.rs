mod cli;
mod frontend;
mod gui;
mod headless;
mod view;
mod view_config;

use clap::Parser;
use common::logger;
use frontend::{resolve_frontend, Frontend, FRONTEND_ENV_VAR};
use view_config::load_view_config;

#[derive(Parser)]
#[command(
    name = "tictactoe",
    about = "Launch Tic Tac Toe using the desired user interface (GUI, headless GUI, or CLI)."
)]
struct Args {
    /// Frontend to launch. Overrides the TICTACTOE_UI environment variable.
    #[arg(long, visible_alias = "frontend", value_name = "NAME")]
    ui: Option<String>,

    /// List the available frontends without launching the app.
    #[arg(long)]
    list_frontends: bool,

    /// Optional view configuration YAML file.
    #[arg(long, value_name = "PATH")]
    config: Option<String>,

    /// Comma separated list of zero-based board positions to run without
    /// prompts (e.g. 0,4,8). CLI frontend only.
    #[arg(long, value_name = "MOVES")]
    script: Option<String>,

    /// Suppress board rendering for scripted runs.
    #[arg(long)]
    quiet: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if args.list_frontends {
        println!("{}", frontend::list_frontends());
        return;
    }

    let env_choice = std::env::var(FRONTEND_ENV_VAR).ok();
    let selected = match resolve_frontend(args.ui.as_deref(), env_choice.as_deref()) {
        Ok(frontend) => frontend,
        Err(message) => fail(&message),
    };

    let view_config = match load_view_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(message) => fail(&message),
    };

    let result = match selected {
        Frontend::Cli => cli::run(args.script.as_deref(), args.quiet),
        Frontend::Gui => gui::run_gui(view_config),
        Frontend::Headless => gui::run_headless(view_config),
    };

    if let Err(message) = result {
        fail(&message);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
