use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::catalog::LoanReceipt;
use crate::store::{CatalogStore, StorageBackend};

pub fn lend<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    isbn: &str,
    member: i32,
) -> Result<CmdResult> {
    match store.lend_book(isbn, member) {
        Ok(receipt) => Ok(report(receipt, "lent to")),
        Err(e) if e.is_not_found() => Ok(refused(
            "Could not lend the book. Check the ISBN and the member number.",
            e.to_string(),
        )),
        Err(e) => Err(e),
    }
}

pub fn give_back<B: StorageBackend>(
    store: &mut CatalogStore<B>,
    isbn: &str,
    member: i32,
) -> Result<CmdResult> {
    match store.return_book(isbn, member) {
        Ok(receipt) => Ok(report(receipt, "returned by")),
        Err(e) if e.is_not_found() => Ok(refused(
            "Could not return the book. Check the ISBN and the member number.",
            e.to_string(),
        )),
        Err(e) => Err(e),
    }
}

fn report(receipt: LoanReceipt, verb: &str) -> CmdResult {
    let mut result = CmdResult::default();
    let status = receipt.outcome.message(receipt.book.title());
    if receipt.outcome.is_redundant() {
        result.add_message(CmdMessage::info(status));
    } else {
        result.add_message(CmdMessage::success(status));
        result.add_message(CmdMessage::info(format!(
            "Book '{}' {} '{}'.",
            receipt.book.title(),
            verb,
            receipt.member.full_name()
        )));
    }
    result.affected_books.push(receipt.book.clone());
    result.loan = Some(receipt);
    result
}

fn refused(summary: &str, detail: String) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(summary));
    result.add_message(CmdMessage::warning(detail));
    result.not_found = true;
    result
}
