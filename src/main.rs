use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::Rng;
use swatchgen::{app, config, palette, tui};
use tracing::Level;

#[derive(Debug, Parser)]
#[command(name = "swatchgen", version, about = "Random color palette generator")]
struct Cli {
    /// Override config file path.
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Generate a palette and print it to stdout (headless).
    Generate {
        /// Number of colors; defaults to the configured count.
        #[arg(allow_negative_numbers = true)]
        count: Option<i64>,
        /// Include the alpha channel in hex output.
        #[arg(long)]
        opacity: bool,
        /// Print the palette as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Config file management.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the config file path.
    Path,
    /// Overwrite the config file with defaults.
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Tui);

    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    // The TUI owns the terminal, so its logs go to a file next to the config.
    let log_file = match command {
        Command::Tui => open_log_file(&cfg_path.with_file_name("swatchgen.log")).ok(),
        _ => None,
    };
    init_logging(cli.verbose, log_file);

    let cfg = config::load(Some(&cfg_path)).context("load config")?;

    match command {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path);
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Generate {
            count,
            opacity,
            json,
        } => {
            let output = generate_output(&cfg, &mut rand::rng(), count, opacity, json)?;
            print!("{output}");
        }
        Command::Config { cmd } => match cmd {
            ConfigCommand::Path => println!("{}", cfg_path.display()),
            ConfigCommand::Reset => {
                config::save(&config::Config::default(), Some(&cfg_path)).context("save config")?;
                println!("Reset config at {}.", cfg_path.display());
            }
        },
    }

    Ok(())
}

/// Stdout text for `generate`: one hex code per line, or pretty JSON.
///
/// Without `count` the configured count is used. Counts past the extended
/// slider maximum are refused.
fn generate_output<R: Rng + ?Sized>(
    cfg: &config::Config,
    rng: &mut R,
    count: Option<i64>,
    opacity: bool,
    json: bool,
) -> anyhow::Result<String> {
    let count = count.unwrap_or_else(|| {
        i64::from(cfg.ui.color_count.unwrap_or(cfg.generator.default_count))
    });
    let max = cfg.generator.max_for(true);
    if count > i64::from(max) {
        anyhow::bail!("color count {count} exceeds the maximum of {max}");
    }

    let palette = palette::generate_with(rng, count)?;
    if json {
        let mut out = serde_json::to_string_pretty(&palette).context("encode palette")?;
        out.push('\n');
        return Ok(out);
    }
    Ok(palette
        .iter()
        .map(|color| format!("{}\n", color.hex(opacity)))
        .collect())
}

fn init_logging(verbose: bool, log_file: Option<std::fs::File>) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .with_level(true);
    match log_file {
        Some(file) => builder
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
}

fn open_log_file(path: &std::path::Path) -> anyhow::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir {}", parent.display()))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use swatchgen::Palette;

    fn run(
        cfg: &config::Config,
        count: Option<i64>,
        opacity: bool,
        json: bool,
    ) -> anyhow::Result<String> {
        generate_output(cfg, &mut StdRng::seed_from_u64(1), count, opacity, json)
    }

    #[test]
    fn test_count_defaults_to_config() {
        let mut cfg = config::Config::default();
        assert_eq!(run(&cfg, None, false, false).unwrap().lines().count(), 5);

        cfg.ui.color_count = Some(3);
        assert_eq!(run(&cfg, None, false, false).unwrap().lines().count(), 3);
        assert_eq!(run(&cfg, Some(8), false, false).unwrap().lines().count(), 8);
    }

    #[test]
    fn test_hex_lines_follow_opacity_flag() {
        let cfg = config::Config::default();
        let plain = run(&cfg, Some(4), false, false).unwrap();
        assert!(plain.lines().all(|l| l.starts_with('#') && l.len() == 7));

        let with_alpha = run(&cfg, Some(4), true, false).unwrap();
        assert!(with_alpha.lines().all(|l| l.starts_with('#') && l.len() == 9));
    }

    #[test]
    fn test_json_output_parses_back() {
        let cfg = config::Config::default();
        let out = run(&cfg, Some(6), false, true).unwrap();
        let palette: Palette = serde_json::from_str(&out).unwrap();
        assert_eq!(palette.len(), 6);
    }

    #[test]
    fn test_zero_count_prints_nothing() {
        let cfg = config::Config::default();
        assert_eq!(run(&cfg, Some(0), false, false).unwrap(), "");
    }

    #[test]
    fn test_negative_count_is_an_error() {
        let cfg = config::Config::default();
        let err = run(&cfg, Some(-1), false, false).unwrap_err();
        assert!(err.to_string().contains("invalid color count -1"));
    }

    #[test]
    fn test_count_above_extended_max_is_refused() {
        let cfg = config::Config::default();
        assert!(run(&cfg, Some(10_000), false, false).is_ok());

        let err = run(&cfg, Some(10_001), false, false).unwrap_err();
        assert!(err.to_string().contains("exceeds the maximum of 10000"));

        let err = run(&cfg, Some(i64::MAX), false, false).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }
}
