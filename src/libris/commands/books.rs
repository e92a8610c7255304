use super::{not_found_as_warning, CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::store::catalog::{BookFields, BookUpdate};
use crate::store::{CatalogStore, StorageBackend};

pub fn add<B: StorageBackend>(store: &mut CatalogStore<B>, fields: BookFields) -> Result<CmdResult> {
    let title = fields.title.clone();
    let isbn = store.add_book(fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book '{}' added to the catalog.",
        title
    )));
    result.affected_books.extend(store.book(&isbn).cloned());
    Ok(result)
}

pub fn modify<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    isbn: &str,
    update: BookUpdate,
) -> Result<CmdResult> {
    match store.modify_book(isbn, update) {
        Ok(book) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Book with ISBN {} modified.",
                isbn
            )));
            result.affected_books.push(book);
            Ok(result)
        }
        Err(e) => not_found_as_warning(e),
    }
}

pub fn delete<B: StorageBackend>(store: &mut CatalogStore<B>, isbn: &str) -> Result<CmdResult> {
    match store.delete_book(isbn) {
        Ok(book) => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Book '{}' removed from the catalog.",
                book.title()
            )));
            result.affected_books.push(book);
            Ok(result)
        }
        Err(e) => not_found_as_warning(e),
    }
}

pub fn search<B: StorageBackend>(store: &CatalogStore<B>, query: &str) -> Result<CmdResult> {
    let hits: Vec<_> = store.search_books(query).into_iter().cloned().collect();
    if hits.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "No books match the search criteria.",
        )));
    }
    Ok(CmdResult::default().with_listed_books(hits))
}

pub fn show<B: StorageBackend>(store: &CatalogStore<B>, isbn: &str) -> Result<CmdResult> {
    match store.book(isbn) {
        Some(book) => Ok(CmdResult::default().with_listed_books(vec![book.clone()])),
        None => not_found_as_warning(LibrisError::BookNotFound(isbn.to_string())),
    }
}

pub fn list<B: StorageBackend>(store: &CatalogStore<B>) -> Result<CmdResult> {
    let books = store.books().to_vec();
    if books.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("The catalog has no books.")));
    }
    Ok(CmdResult::default().with_listed_books(books))
}
