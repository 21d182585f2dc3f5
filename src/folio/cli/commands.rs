//! # CLI Layer
//!
//! This module is **one possible UI client** for folio; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Merge config file and flags, load the dataset, pick a theme
//! 3. **Dispatch**: One-shot commands go through `FolioApi`; `browse` drives a `Browser`
//! 4. **Output Formatting**: Convert `CmdResult` into terminal output
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, theme and renderer
//! - `handle_*()`: Per-command handlers that call the API and print

use super::render::{
    render_book_list, render_config, render_detail, render_load_more, render_messages,
    render_options, render_themes, Renderer,
};
use super::setup::{print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands};
use super::terminal::{run_session, TerminalView};
use clap::Parser;
use console::Term;
use folio::api::{CmdMessage, FolioApi};
use folio::config::{default_config_dir, FolioConfig};
use folio::controller::{resolve_theme, Browser, BrowserOptions};
use folio::dataset::{builtin, json, StaticDataset};
use folio::error::Result;
use folio::logging;
use folio::pagination::PageSize;
use folio::theme::{detect_color_scheme, ColorScheme};
use std::io::{self, IsTerminal};

struct AppContext {
    api: FolioApi<StaticDataset>,
    renderer: Renderer,
    theme: String,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // top level gets grouped help, subcommands clap's default
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Help { command }) = &cli.command {
        return handle_help(command.as_deref());
    }

    logging::init(cli.verbose)?;
    let ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Browse) => handle_browse(&ctx),
        Some(Commands::List {
            title,
            author,
            genre,
            pages,
        }) => handle_list(&ctx, &title, &author, &genre, pages),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Authors) => handle_authors(&ctx),
        Some(Commands::Genres) => handle_genres(&ctx),
        Some(Commands::Themes) => handle_themes(&ctx),
        Some(Commands::Config) => handle_config(&ctx),
        Some(Commands::Help { command }) => handle_help(command.as_deref()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = load_config(cli)?;

    let dataset = match &config.dataset {
        Some(path) => json::load(path)?,
        None => builtin::load()?,
    };

    let scheme = if config.theme.is_some() {
        ColorScheme::Light
    } else {
        detect_color_scheme()
    };
    let (theme, colors) = resolve_theme(&dataset, config.theme.as_deref(), scheme)?;
    tracing::debug!(theme = %theme, page_size = %config.page_size, "context ready");

    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    Ok(AppContext {
        api: FolioApi::new(dataset, config),
        renderer: Renderer::themed(colors, use_color),
        theme,
        use_color,
    })
}

/// config.json first, then command-line flags on top.
fn load_config(cli: &Cli) -> Result<FolioConfig> {
    let mut config = match cli.config_dir.clone().or_else(default_config_dir) {
        Some(dir) => FolioConfig::load(dir)?,
        None => FolioConfig::default(),
    };

    if let Some(size) = cli.page_size {
        config = config.with_page_size(PageSize::new(size)?);
    }
    if let Some(theme) = &cli.theme {
        config = config.with_theme(theme.clone());
    }
    if let Some(path) = &cli.dataset {
        config = config.with_dataset(path.clone());
    }
    Ok(config)
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let settings = ctx.api.settings();
    let options = BrowserOptions {
        page_size: settings.page_size,
        theme: Some(ctx.theme.clone()),
        ..BrowserOptions::default()
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        println!("Type help for the list of commands.");
    }

    let view = TerminalView::new(io::stdout().lock(), ctx.use_color);
    let mut browser = Browser::start(ctx.api.dataset(), view, options)?;
    run_session(&mut browser, stdin.lock(), interactive)
}

fn handle_list(ctx: &AppContext, title: &str, author: &str, genre: &str, pages: usize) -> Result<()> {
    let result = ctx.api.search(title, author, genre, pages)?;
    print!("{}", render_book_list(&ctx.renderer, &result.listed_books));
    if let Some(control) = result.load_more.filter(|c| c.enabled) {
        print!("{}", render_load_more(&ctx.renderer, &control));
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show_book(id)?;
    if let Some(detail) = &result.detail {
        print!("{}", render_detail(&ctx.renderer, detail));
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_authors(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.authors()?;
    print!("{}", render_options(&ctx.renderer, &result.options));
    Ok(())
}

fn handle_genres(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.genres()?;
    print!("{}", render_options(&ctx.renderer, &result.options));
    Ok(())
}

fn handle_themes(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.themes()?;
    print!(
        "{}",
        render_themes(&ctx.renderer, &result.themes, Some(ctx.theme.as_str()))
    );
    Ok(())
}

fn handle_config(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.config()?;
    if let Some(config) = &result.config {
        print!("{}", render_config(&ctx.renderer, config));
    }
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(name),
        None => print_grouped_help(),
    }
    Ok(())
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) {
    let output = render_messages(&ctx.renderer, messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}
