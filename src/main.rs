use anyhow::{Context, Result};
use clap::{Command, CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::{Generator, Shell, generate};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use simple_select::config::{Config, ConfigError};
use simple_select::logging;
use simple_select::select::{Delegates, Item, shared, source};
use simple_select::tui::{
    app::{App, Outcome},
    template::ItemTemplate,
    ui,
};
use std::io;
use std::rc::Rc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "simple-select")]
#[command(about = "Tick items from a markdown checklist and print the selection")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(help = "Checklist file to pick from (defaults to the configured file_path)", value_hint = ValueHint::FilePath)]
    file: Option<String>,

    #[arg(long, help = "Row template, {name} is replaced by the item name")]
    template: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (file_path, item_template or log_level)")]
        key: String,
        #[arg(help = "Configuration value, empty to unset")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => match run_main_app(cli.file, cli.template) {
            Ok(Outcome::Aborted) => std::process::exit(130),
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        },
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, value)?;
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?.unwrap_or_default());
        }
        ConfigAction::List => {
            let config = Config::load()?;
            for key in simple_select::config::KEYS {
                println!("{} = {}", key, config.get(key)?.unwrap_or_default());
            }
        }
    }
    Ok(())
}

fn run_main_app(file: Option<String>, template: Option<String>) -> Result<Outcome> {
    let config = Config::load().map_err(|e| anyhow::anyhow!("Configuration error: {}", e))?;

    // Held until exit so buffered log lines are flushed.
    let _log_guard = match logging::default_log_dir() {
        Some(dir) => Some(logging::init(&dir, config.log_level.as_deref())?),
        None => None,
    };

    let file_path = file.or(config.file_path.clone()).context(
        "No checklist file given. Pass one as an argument or run 'simple-select config set file_path <path>'",
    )?;
    let items = source::load_items(&file_path)?;
    info!(file = %file_path, count = items.len(), "loaded items");

    let collection = shared(items);
    let delegates = Delegates::new()
        .on_item_click(|item: &Item| {
            info!(name = %item.name, ticked = item.ticked, "item clicked");
            Ok(())
        })
        .on_tick_all(|| {
            info!("tick all clicked");
            Ok(())
        });

    let mut app = App::new(Rc::clone(&collection), delegates)
        .with_template(ItemTemplate::from_pattern(template.or(config.item_template)))
        .with_title(file_path);

    run_tui(&mut app)?;

    if app.outcome == Outcome::Confirmed {
        print!("{}", source::format_selection(collection.borrow().as_slice()));
    } else {
        warn!("selection aborted");
    }
    Ok(app.outcome)
}

fn run_tui(app: &mut App<Item>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<Item>) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key_event(key)?,
            Event::Mouse(mouse) => app.handle_mouse_event(mouse)?,
            _ => {}
        }
        if app.should_quit() {
            break;
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
