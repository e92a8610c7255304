use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "libris")]
#[command(about = "Keep track of a small library's books, members and loans", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the catalog files (overrides LIBRIS_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add, modify, delete and find books
    #[command(subcommand)]
    Book(BookCommands),

    /// Add, modify and delete members
    #[command(subcommand)]
    Member(MemberCommands),

    /// Lend a book to a member
    #[command(allow_negative_numbers = true)]
    Lend {
        /// ISBN of the book
        isbn: String,
        /// Member number of the borrower
        member: i32,
    },

    /// Return a lent book
    #[command(allow_negative_numbers = true)]
    Return {
        /// ISBN of the book
        isbn: String,
        /// Member number of the borrower
        member: i32,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (books-file, members-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct BookArgs {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
}

#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Add a book to the catalog
    #[command(alias = "n", allow_negative_numbers = true)]
    Add {
        /// ISBN of the new book
        isbn: String,
        #[command(flatten)]
        fields: BookArgs,
    },

    /// Replace a book's title, author, year and page count
    #[command(alias = "e", allow_negative_numbers = true)]
    Modify {
        /// ISBN of the book to change
        isbn: String,
        #[command(flatten)]
        fields: BookArgs,
    },

    /// Remove a book from the catalog
    #[command(alias = "rm")]
    Delete { isbn: String },

    /// Find books by title, author or ISBN (case-sensitive)
    Search { query: String },

    /// Show one book
    #[command(alias = "v")]
    Show { isbn: String },

    /// List every book
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// Register a member
    #[command(alias = "n", allow_negative_numbers = true)]
    Add {
        first_name: String,
        last_name: String,
        number: i32,
    },

    /// Rename a member
    #[command(alias = "e", allow_negative_numbers = true)]
    Modify {
        number: i32,
        first_name: String,
        last_name: String,
    },

    /// Remove a member
    #[command(alias = "rm", allow_negative_numbers = true)]
    Delete { number: i32 },

    /// List every member
    #[command(alias = "ls")]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_book_add() {
        let cli = Cli::try_parse_from([
            "libris", "book", "add", "111", "Dune", "Herbert", "1965", "412",
        ])
        .unwrap();
        match cli.command {
            Commands::Book(BookCommands::Add { isbn, fields }) => {
                assert_eq!(isbn, "111");
                assert_eq!(fields.title, "Dune");
                assert_eq!(fields.pages, 412);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn parses_lend_with_global_flags() {
        let cli = Cli::try_parse_from(["libris", "lend", "111", "5", "--data-dir", "/tmp/x", "-v"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Commands::Lend { member: 5, .. }));
    }

    #[test]
    fn accepts_negative_numbers() {
        let cli = Cli::try_parse_from(["libris", "member", "add", "Ada", "Lovelace", "-3"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Member(MemberCommands::Add { number: -3, .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_member() {
        assert!(Cli::try_parse_from(["libris", "return", "111", "five"]).is_err());
    }
}
