//! Campaign Creator - influencer campaign configuration wizard
//!
//! Walks a marketer through campaign basics, keywords and categories, and a
//! results preview in the terminal. Non-interactive options look up the
//! category catalog or check a saved campaign file.

use anyhow::Result;
use campaign_creator::campaign::{
    CampaignFormData, JsonFileSink, LogSink, SubmissionSink, filter_categories, load_campaign_file,
};
use campaign_creator::tui::{Theme, display_check, display_summary};
use campaign_creator::{AppConfig, Cli, TuiApp, init_locale};
use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{Level, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize i18n for this binary
rust_i18n::i18n!("locales", fallback = "en");

// CLI Output Module
mod cli_output {
    //! CLI 输出美化模块
    //!
    //! 为命令行输出提供统一的颜色和格式样式。

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;

    /// CLI 主题颜色
    pub struct CliTheme;

    impl CliTheme {
        /// 成功颜色（绿色）
        pub const SUCCESS: Color = Color::Green;
        /// 错误颜色（红色）
        pub const ERROR: Color = Color::Red;
        /// 提示颜色（暗灰色）
        pub const HINT: Color = Color::DarkGrey;
        /// 强调颜色（青色）
        pub const ACCENT: Color = Color::Cyan;
    }

    /// 打印分隔线
    pub fn print_separator() {
        let _ = stdout().execute(Print(&format!("{}\n", "─".repeat(60))));
    }

    /// 打印居中的标题
    pub fn print_title(title: &str) {
        let width: usize = 60;
        let padding = width.saturating_sub(title.chars().count()) / 2;
        let left_pad = " ".repeat(padding.saturating_sub(1));

        let _ = stdout().execute(Print(&format!(
            "{}{} {}{}\n",
            left_pad,
            "╔".bold().stylize(),
            title.bold().stylize(),
            "╗".bold().stylize(),
        )));
    }

    /// 打印错误消息
    pub fn print_error(msg: &str) {
        let _ = stdout().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印成功消息
    pub fn print_success(msg: &str) {
        let _ = stdout().execute(Print(style("✓ ").with(CliTheme::SUCCESS).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印提示消息
    pub fn print_hint(msg: &str) {
        let _ = stdout().execute(Print(style("→ ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印分类条目
    pub fn print_category(id: u32, title: &str) {
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(style(format!("{:>3}", id)).with(CliTheme::ACCENT)));
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(format!("{}\n", title)));
    }

    /// 打印日志文件路径
    pub fn print_log_path(label: &str, path: &str) {
        let _ = stdout().execute(Print("\n"));
        let _ = stdout().execute(Print(style("  📁 ").with(CliTheme::ACCENT)));
        let _ = stdout().execute(Print(style(format!("{} ", label)).with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", path)));
    }

    /// 打印空行
    pub fn print_blank() {
        let _ = stdout().execute(Print("\n"));
    }
}

/// Convenience macro for translation
macro_rules! t {
    ($key:expr) => {
        rust_i18n::t!($key)
    };
    ($key:expr, $($tt:tt)*) => {
        rust_i18n::t!($key, $($tt)*)
    };
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Get the executable directory for Config and Log directories
    let exe_dir = get_executable_dir()?;

    // Config comes first: it may override the UI locale
    let config = load_config(&cli, &exe_dir)?;
    init_locale(config.locale.as_deref());

    let log_dir = config.resolved_log_dir(&exe_dir);

    if cli.wants_interactive() {
        run_interactive_mode(&cli, &config, &log_dir)?;
        Ok(ExitCode::SUCCESS)
    } else {
        run_cli_mode(&cli, &config, &log_dir)
    }
}

/// Run in interactive mode with Ratatui TUI
fn run_interactive_mode(cli: &Cli, config: &AppConfig, log_dir: &Path) -> Result<()> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("Interactive_{}.log", timestamp));

    // Setup file-only logging before TUI starts
    let _guard = setup_file_only_logging(cli, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Campaign Creator starting in interactive mode"
    );
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }

    let form = CampaignFormData::with_currency(config.default_currency);
    let sink: Box<dyn SubmissionSink> = match config.submit_file {
        Some(ref path) => Box::new(JsonFileSink::new(path.clone())),
        None => Box::new(LogSink),
    };

    let mut app = TuiApp::new(
        form,
        Theme::from_variant(config.theme),
        sink,
        config.submit_file.clone(),
    )?;
    let result = app.run()?;

    if result.submitted {
        info!(log_file = %log_path.display(), "Interactive session complete");
    } else {
        info!("User left the wizard without completing the campaign");
    }

    display_summary(&result, config.submit_file.as_deref());
    cli_output::print_log_path(&t!("log_saved_to"), &log_path.display().to_string());

    Ok(())
}

/// Run in standard CLI mode
///
/// Failures return an exit code instead of exiting, so the log guard flushes.
fn run_cli_mode(cli: &Cli, config: &AppConfig, log_dir: &Path) -> Result<ExitCode> {
    use cli_output::*;

    // Determine log file path based on config file or timestamp
    let log_path = get_log_path(log_dir, cli);

    // Setup logging
    let _guard = setup_logging(cli, &log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Campaign Creator starting"
    );
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }

    if cli.sample_config {
        print!("{}", AppConfig::sample_config());
    }

    if let Some(ref path) = cli.save_config {
        config.save_to_file(path)?;
        info!(path = %path.display(), "Configuration saved");
        print_success(&format!("{} {}", t!("cli_config_saved"), path.display()));
    }

    if let Some(ref query) = cli.categories {
        let matches = filter_categories(query);
        info!(query = %query, matches = matches.len(), "Category lookup");

        print_separator();
        print_title(&t!("cli_categories_title"));
        print_separator();
        if matches.is_empty() {
            print_hint(&t!("category_no_match"));
        }
        for category in &matches {
            print_category(category.id, category.title);
        }
        print_blank();
    }

    if let Some(ref path) = cli.check {
        if !check_campaign_file(path) {
            return Ok(ExitCode::FAILURE);
        }
    }

    info!(log_file = %log_path.display(), "Run complete. Log saved to");

    Ok(ExitCode::SUCCESS)
}

/// Print per-step readiness of a campaign file; `false` when it cannot pass
fn check_campaign_file(path: &Path) -> bool {
    use cli_output::*;

    let form = match load_campaign_file(path) {
        Ok(form) => form,
        Err(e) => {
            error!(error = %e, "Campaign check failed");
            print_error(&e.to_string());
            return false;
        }
    };

    print_separator();
    print_title(&t!("cli_check_title"));
    print_separator();
    let ready = display_check(&form);
    print_blank();

    if ready {
        info!(file = %path.display(), "Campaign file passes every step");
        print_success(&t!("check_all_ready"));
    } else {
        warn!(file = %path.display(), "Campaign file is blocked on at least one step");
        print_error(&t!("check_some_blocked"));
    }
    ready
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Determine the log file path based on config file or timestamp
fn get_log_path(log_dir: &Path, cli: &Cli) -> PathBuf {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    if let Some(config_name) = cli.config_name() {
        let config_log_dir = log_dir.join(&config_name);
        let log_filename = format!("{}_{}.log", config_name, timestamp);
        config_log_dir.join(log_filename)
    } else {
        let log_filename = format!("CLIRun_{}.log", timestamp);
        log_dir.join(log_filename)
    }
}

/// Resolve config path - supports shorthand syntax
fn resolve_config_path(exe_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.exists() {
        return config_path.to_path_buf();
    }

    let with_extension = if config_path.extension().is_none() {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    if with_extension.exists() {
        return with_extension;
    }

    let config_dir = exe_dir.join("Config");
    let filename = config_path.file_name().unwrap_or(config_path.as_os_str());

    let mut in_config_dir = config_dir.join(filename);
    if in_config_dir.extension().is_none() {
        in_config_dir = in_config_dir.with_extension("toml");
    }

    if in_config_dir.exists() {
        return in_config_dir;
    }

    config_path.to_path_buf()
}

/// Load configuration from file or CLI arguments
fn load_config(cli: &Cli, exe_dir: &Path) -> Result<AppConfig> {
    let config = if let Some(ref config_path) = cli.config {
        let resolved_path = resolve_config_path(exe_dir, config_path);
        let file_config = AppConfig::load_from_file(&resolved_path)?;
        cli.merge_with_config(file_config)
    } else {
        cli.to_config()
    };

    Ok(config)
}

/// Open (truncate) the log file, creating its directory
fn open_log_file(log_path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;
    Ok(file)
}

fn env_filter(cli: &Cli) -> EnvFilter {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Setup logging for CLI mode (file + console)
fn setup_logging(cli: &Cli, log_path: &Path) -> Result<Option<WorkerGuard>> {
    let file = open_log_file(log_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter(cli));

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(Some(guard))
}

/// Setup logging for interactive mode (file only, no console)
fn setup_file_only_logging(cli: &Cli, log_path: &Path) -> Result<Option<WorkerGuard>> {
    let file = open_log_file(log_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter(cli));

    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    Ok(Some(guard))
}
