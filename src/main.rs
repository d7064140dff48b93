mod app;
mod cli;
mod dialogs;
mod error;
mod event;
mod logging;
mod storage;
mod store;
mod theme;
mod ui;
mod ui_state;

use std::io;
use std::panic;
use std::process::ExitCode;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use app::App;
use cli::{Cli, Commands};
use storage::config::Config;
use store::FilterMode;
use theme::Theme;

/// 启动 TUI 界面
fn run_tui(theme: Theme, filter: FilterMode) -> io::Result<()> {
    tracing::info!(theme = theme.label(), filter = filter.label(), "starting tui");

    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    // 创建应用
    let mut app = App::new(theme, filter);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    tracing::info!(tasks = app.store.len(), "tui exited");
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::task_page::render(frame, app))?;

        if !event::handle_events(app)? {
            return Ok(());
        }
    }
}

/// 命令行主题优先于配置；无法识别时报错
fn resolve_theme(arg: Option<&str>, config: &Config) -> Result<Theme, String> {
    match arg {
        Some(name) => Theme::from_name(name).ok_or_else(|| {
            let names: Vec<&str> = Theme::all().iter().map(|t| t.label()).collect();
            format!("unknown theme '{}' (available: {})", name, names.join(", "))
        }),
        None => Ok(config.theme()),
    }
}

fn main() -> ExitCode {
    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 解析命令行参数
    let cli = Cli::parse();

    let (config, config_error) = storage::config::load_config();
    let _log_guard = logging::init_logging(&storage::log_dir(), &config.log.level);
    if let Some(e) = config_error {
        tracing::warn!(
            path = %storage::config::config_path().display(),
            error = %e,
            "failed to load config, using defaults"
        );
    }

    let command = cli.command.unwrap_or(Commands::Tui {
        theme: None,
        filter: None,
    });

    let result = match command {
        Commands::Tui { theme, filter } => match resolve_theme(theme.as_deref(), &config) {
            Ok(theme) => run_tui(theme, filter.unwrap_or(config.view.filter))
                .map_err(error::TaskflowError::from),
            Err(msg) => {
                eprintln!("Error: {}", msg);
                return ExitCode::FAILURE;
            }
        },
        Commands::Themes => {
            cli::themes::execute(config.theme());
            Ok(())
        }
        Commands::Init { force } => cli::init::execute(&storage::config::config_path(), force),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_theme_prefers_cli() {
        let config = Config::default();
        assert_eq!(resolve_theme(Some("galaxy"), &config), Ok(Theme::Galaxy));
        assert_eq!(resolve_theme(None, &config), Ok(Theme::Violet));
    }

    #[test]
    fn test_resolve_theme_unknown() {
        let err = resolve_theme(Some("neon"), &Config::default()).unwrap_err();
        assert!(err.contains("unknown theme 'neon'"));
        assert!(err.contains("Violet, Coral, Mint, Sunset, Galaxy"));
    }
}
