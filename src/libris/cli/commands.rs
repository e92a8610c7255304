use super::args::{BookArgs, BookCommands, Cli, Commands, MemberCommands};
use super::print::{print_books, print_config, print_members, print_messages};
use clap::Parser;
use libris::api::{CmdResult, ConfigAction, LibraryApi};
use libris::commands;
use libris::config::resolve_data_dir;
use libris::error::{LibrisError, Result};
use libris::store::catalog::{BookFields, BookUpdate, MemberFields, MemberUpdate};
use libris::store::fs_backend::FsBackend;
use tracing::Level;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir)?;

    // Config runs without loading the catalog.
    let result = match cli.command {
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            commands::config::run(&data_dir, action)?
        }
        command => {
            tracing::debug!(data_dir = %data_dir.display(), "opening catalog");
            let mut api = LibraryApi::open(data_dir)?;
            handle_catalog(&mut api, command)?
        }
    };
    render(&result);
    Ok(())
}

fn handle_catalog(api: &mut LibraryApi<FsBackend>, command: Commands) -> Result<CmdResult> {
    match command {
        Commands::Book(cmd) => handle_book(api, cmd),
        Commands::Member(cmd) => handle_member(api, cmd),
        Commands::Lend { isbn, member } => api.lend_book(&isbn, member),
        Commands::Return { isbn, member } => api.return_book(&isbn, member),
        Commands::Config { .. } => Err(LibrisError::Api(
            "config does not operate on the catalog".to_string(),
        )),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_book(api: &mut LibraryApi<FsBackend>, cmd: BookCommands) -> Result<CmdResult> {
    match cmd {
        BookCommands::Add { isbn, fields } => {
            let BookArgs {
                title,
                author,
                year,
                pages,
            } = fields;
            api.add_book(BookFields {
                title,
                author,
                isbn,
                year,
                pages,
            })
        }
        BookCommands::Modify { isbn, fields } => {
            let update = BookUpdate {
                title: fields.title,
                author: fields.author,
                year: fields.year,
                pages: fields.pages,
            };
            api.modify_book(&isbn, update)
        }
        BookCommands::Delete { isbn } => api.delete_book(&isbn),
        BookCommands::Search { query } => api.search_books(&query),
        BookCommands::Show { isbn } => api.show_book(&isbn),
        BookCommands::List => api.list_books(),
    }
}

fn handle_member(api: &mut LibraryApi<FsBackend>, cmd: MemberCommands) -> Result<CmdResult> {
    match cmd {
        MemberCommands::Add {
            first_name,
            last_name,
            number,
        } => api.add_member(MemberFields {
            first_name,
            last_name,
            number,
        }),
        MemberCommands::Modify {
            number,
            first_name,
            last_name,
        } => api.modify_member(
            number,
            MemberUpdate {
                first_name,
                last_name,
            },
        ),
        MemberCommands::Delete { number } => api.delete_member(number),
        MemberCommands::List => api.list_members(),
    }
}

fn render(result: &CmdResult) {
    print_books(&result.listed_books);
    print_members(&result.listed_members);
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
}
