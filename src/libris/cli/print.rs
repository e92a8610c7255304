use colored::Colorize;
use libris::api::{CmdMessage, MessageLevel};
use libris::config::LibrisConfig;
use libris::error::LibrisError;
use libris::model::{Book, Member};

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_books(books: &[Book]) {
    for book in books {
        let line = book.describe();
        if book.is_borrowed() {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
}

pub(super) fn print_members(members: &[Member]) {
    for member in members {
        println!("{}", member.describe());
    }
}

pub(super) fn print_config(config: &LibrisConfig) {
    for key in LibrisConfig::keys() {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key.bold(), value);
        }
    }
}

pub fn print_error(err: &LibrisError) {
    eprintln!("{} {}", "Error:".red().bold(), err);
}
