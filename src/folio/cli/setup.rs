use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// "0.1.0" without git metadata, "0.1.0@abc1234" inside a checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("FOLIO_GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    bin_name = "folio",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Browse a book catalog from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to load instead of the built-in one
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub dataset: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Books per page
    #[arg(long, global = true, value_name = "N", help_heading = "Options")]
    pub page_size: Option<usize>,

    /// Theme name (overrides the system color scheme)
    #[arg(long, global = true, value_name = "NAME", help_heading = "Options")]
    pub theme: Option<String>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Catalog,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browsing Commands:",
            CommandGroup::Catalog => "Catalog Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "browse" | "list" | "show" => Some(CommandGroup::Browse),
            "authors" | "genres" | "themes" => Some(CommandGroup::Catalog),
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Display order
    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Browse, CommandGroup::Catalog, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("folio {version}\n"));
    output.push_str("Browse a book catalog from the terminal\n");
    output.push('\n');
    output.push_str("Usage: folio [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --dataset <PATH>     Catalog file to load instead of the built-in one\n");
    output.push_str("      --config-dir <DIR>   Directory holding config.json\n");
    output.push_str("      --page-size <N>      Books per page\n");
    output.push_str("      --theme <NAME>       Theme name (overrides the system color scheme)\n");
    output.push_str("      --no-color           Disable colored output\n");
    output.push_str("  -v, --verbose            Verbose output\n");
    output.push_str("  -h, --help               Print help\n");
    output.push_str("  -V, --version            Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Browse) => "browse",
        Some(Commands::List { .. }) => "list",
        Some(Commands::Show { .. }) => "show",
        Some(Commands::Authors) => "authors",
        Some(Commands::Genres) => "genres",
        Some(Commands::Themes) => "themes",
        Some(Commands::Config) => "config",
        Some(Commands::Help { .. }) => "help",
        None => {
            print_grouped_help();
            return;
        }
    };
    print_help_for_command(name);
}

/// Clap's own help for one subcommand; grouped help for unknown names.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog interactively (default)
    #[command(display_order = 1)]
    Browse,

    /// List books matching the filters
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Title substring (case-insensitive)
        #[arg(short, long, default_value = "")]
        title: String,

        /// Author id, or "any"
        #[arg(short, long, default_value = "any")]
        author: String,

        /// Genre id, or "any"
        #[arg(short, long, default_value = "any")]
        genre: String,

        /// Number of pages to reveal
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },

    /// Show a book's details
    #[command(alias = "v", display_order = 3)]
    Show {
        /// Book id
        id: String,
    },

    /// List authors with their ids
    #[command(display_order = 10)]
    Authors,

    /// List genres with their ids
    #[command(display_order = 11)]
    Genres,

    /// List available themes
    #[command(display_order = 12)]
    Themes,

    /// Print the effective configuration
    #[command(display_order = 20)]
    Config,

    /// Print help for folio or a subcommand
    #[command(display_order = 21)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_browse() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["folio", "list"]).unwrap();
        match cli.command {
            Some(Commands::List {
                title,
                author,
                genre,
                pages,
            }) => {
                assert_eq!(title, "");
                assert_eq!(author, "any");
                assert_eq!(genre, "any");
                assert_eq!(pages, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_list_filters_and_globals() {
        let cli = Cli::try_parse_from([
            "folio",
            "ls",
            "-t",
            "dune",
            "-a",
            "a-herbert",
            "--page-size",
            "5",
            "--theme",
            "night",
        ])
        .unwrap();
        assert_eq!(cli.page_size, Some(5));
        assert_eq!(cli.theme.as_deref(), Some("night"));
        assert!(matches!(
            cli.command,
            Some(Commands::List { ref title, ref author, .. }) if title == "dune" && author == "a-herbert"
        ));
    }

    #[test]
    fn test_show_requires_id() {
        assert!(Cli::try_parse_from(["folio", "show"]).is_err());
        let cli = Cli::try_parse_from(["folio", "v", "b1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show { ref id }) if id == "b1"));
    }

    #[test]
    fn test_page_size_must_be_numeric() {
        assert!(Cli::try_parse_from(["folio", "--page-size", "lots"]).is_err());
    }

    #[test]
    fn test_grouped_help_lists_every_command() {
        let help = get_grouped_help();
        for name in ["browse", "list", "show", "authors", "genres", "themes", "config"] {
            assert!(help.contains(&format!("  {}", name)), "missing {}", name);
        }
        assert!(help.contains("Browsing Commands:"));
        assert!(help.contains("Catalog Commands:"));
    }

    #[test]
    fn test_every_command_has_a_group() {
        for sc in Cli::command().get_subcommands() {
            assert!(
                CommandGroup::for_command(sc.get_name()).is_some(),
                "{} has no group",
                sc.get_name()
            );
        }
    }
}
