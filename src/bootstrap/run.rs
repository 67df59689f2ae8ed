use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use gym_app::app_paths::AppPaths;
use gym_app::OnboardingApp;
use gym_core::config::AppConfig;
use gym_core::ports::AppDirsPort;
use gym_infra::config::load_config_or_default;
use gym_infra::fs::DirsAppDirsAdapter;

use super::cli::Cli;
use super::config::{resolve_config_path, resolve_storage_dir};
use super::tracing::init_tracing_subscriber;
use super::wiring::{wire_dependencies, StorageMode};
use crate::console::{ConsoleSession, Flow};

/// Run the whole application on stdin/stdout until the user quits.
pub async fn start(cli: Cli) -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    let config_path = resolve_config_path(cli.config.as_deref(), &paths);
    let loaded = load_config_or_default(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_else(|_| AppConfig::empty());

    let logs_dir = config.file_logging.then_some(paths.logs_dir.as_path());
    init_tracing_subscriber(logs_dir)?;
    if let Err(err) = &loaded {
        warn!(path = %config_path.display(), error = %err, "failed to load config, using defaults");
    }

    let storage = if cli.ephemeral {
        StorageMode::Memory
    } else {
        StorageMode::Directory(resolve_storage_dir(cli.data_dir.as_deref(), &config, &paths))
    };
    let deps = wire_dependencies(&config, storage)?;

    let app = OnboardingApp::mount(deps).await;
    let verification = app.start_verification();

    let stdin = BufReader::new(tokio::io::stdin());
    let result = run_console(app, stdin, std::io::stdout()).await;

    verification.abort();
    info!("shutting down");
    result
}

/// Drive a console session from `input`, writing screens to `output`.
pub async fn run_console<R, W>(app: OnboardingApp, input: R, mut output: W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = ConsoleSession::new(app);
    writeln!(output, "{}", session.screen().await)?;
    output.flush()?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match session.handle(&line).await {
            Flow::Continue(text) => {
                writeln!(output, "{text}")?;
                output.flush()?;
            }
            Flow::Quit => break,
        }
    }

    Ok(())
}
