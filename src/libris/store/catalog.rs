use super::backend::{Collection, StorageBackend};
use crate::codec::{self, Record};
use crate::error::{LibrisError, Result};
use crate::lending::{Lendable, LoanOutcome};
use crate::model::{Book, Member, PublicationInfo};

/// Input for a new book. New books are always available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
    pub pages: i32,
}

impl BookFields {
    pub fn into_book(self) -> Book {
        Book::new(
            PublicationInfo::new(self.title, self.author, self.isbn, self.year),
            self.pages,
        )
    }
}

/// Replacement values for a book. The ISBN and loan state are not editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub pages: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFields {
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
}

/// Replacement values for a member. The member number is not editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberUpdate {
    pub first_name: String,
    pub last_name: String,
}

/// What a lend or return did, with the records involved as they are afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanReceipt {
    pub outcome: LoanOutcome,
    pub book: Book,
    pub member: Member,
}

/// In-memory catalog of books and members, persisted through a backend.
///
/// Collections keep insertion order, which is also the order written to disk.
/// ISBNs and member numbers are unique: adds with a taken key are refused
/// with `DuplicateIsbn` or `DuplicateMember`. Duplicates found in stored data
/// keep their first record and drop the rest at the next rewrite.
///
/// Every mutation is applied, then the affected collection is rewritten in
/// full. If the rewrite fails the in-memory change is rolled back, so memory
/// and storage never disagree after an error.
pub struct CatalogStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    books: Vec<Book>,
    members: Vec<Member>,
}

impl<B: StorageBackend> CatalogStore<B> {
    /// An empty catalog. Nothing is read until [`load`](Self::load) is called.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            books: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // --- Lifecycle ---

    /// Replace the in-memory collections with what the backend holds.
    ///
    /// Missing data means an empty collection. A malformed line fails the whole
    /// load and leaves the current collections untouched.
    pub fn load(&mut self) -> Result<()> {
        let books = dedupe(self.read_collection(Collection::Books)?, |b: &Book| {
            b.isbn().to_string()
        });
        let members = dedupe(self.read_collection(Collection::Members)?, |m: &Member| {
            m.number.to_string()
        });

        tracing::debug!(
            books = books.len(),
            members = members.len(),
            "catalog loaded"
        );
        self.books = books;
        self.members = members;
        Ok(())
    }

    /// Rewrite both collections from memory.
    pub fn save(&self) -> Result<()> {
        self.persist(Collection::Books)?;
        self.persist(Collection::Members)
    }

    fn read_collection<R: Record>(&self, collection: Collection) -> Result<Vec<R>> {
        match self.backend.read(collection)? {
            Some(text) => codec::decode_all(&text),
            None => {
                tracing::debug!(%collection, "no stored data, starting empty");
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, collection: Collection) -> Result<()> {
        let text = match collection {
            Collection::Books => codec::encode_all(&self.books)?,
            Collection::Members => codec::encode_all(&self.members)?,
        };
        self.backend.write(collection, &text)?;
        tracing::debug!(%collection, "collection saved");
        Ok(())
    }

    /// Run a mutation on the books, persist, and roll back if persisting fails.
    fn commit_books<T>(&mut self, change: impl FnOnce(&mut Vec<Book>) -> Result<T>) -> Result<T> {
        let snapshot = self.books.clone();
        let value = change(&mut self.books)?;
        if let Err(e) = self.persist(Collection::Books) {
            self.books = snapshot;
            return Err(e);
        }
        Ok(value)
    }

    fn commit_members<T>(
        &mut self,
        change: impl FnOnce(&mut Vec<Member>) -> Result<T>,
    ) -> Result<T> {
        let snapshot = self.members.clone();
        let value = change(&mut self.members)?;
        if let Err(e) = self.persist(Collection::Members) {
            self.members = snapshot;
            return Err(e);
        }
        Ok(value)
    }

    // --- Queries ---

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn book(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn() == isbn)
    }

    pub fn member(&self, number: i32) -> Option<&Member> {
        self.members.iter().find(|m| m.number == number)
    }

    /// Books whose title, author or ISBN contains `query` (case-sensitive).
    pub fn search_books(&self, query: &str) -> Vec<&Book> {
        self.books.iter().filter(|b| b.matches(query)).collect()
    }

    // --- Books ---

    /// Add a book and return its ISBN.
    pub fn add_book(&mut self, fields: BookFields) -> Result<String> {
        if self.book(&fields.isbn).is_some() {
            return Err(LibrisError::DuplicateIsbn(fields.isbn));
        }
        let book = fields.into_book();
        let isbn = book.isbn().to_string();
        self.commit_books(|books| {
            books.push(book);
            Ok(())
        })?;
        tracing::info!(%isbn, "book added");
        Ok(isbn)
    }

    /// Overwrite a book's descriptive fields. The loan state is kept.
    pub fn modify_book(&mut self, isbn: &str, update: BookUpdate) -> Result<Book> {
        let book = self.commit_books(|books| {
            let book = find_book_mut(books, isbn)?;
            book.info.title = update.title;
            book.info.author = update.author;
            book.info.year = update.year;
            book.pages = update.pages;
            Ok(book.clone())
        })?;
        tracing::info!(isbn, "book modified");
        Ok(book)
    }

    pub fn delete_book(&mut self, isbn: &str) -> Result<Book> {
        let removed = self.commit_books(|books| {
            let pos = books
                .iter()
                .position(|b| b.isbn() == isbn)
                .ok_or_else(|| LibrisError::BookNotFound(isbn.to_string()))?;
            Ok(books.remove(pos))
        })?;
        tracing::info!(isbn, "book deleted");
        Ok(removed)
    }

    // --- Members ---

    /// Add a member and return their member number.
    pub fn add_member(&mut self, fields: MemberFields) -> Result<i32> {
        if self.member(fields.number).is_some() {
            return Err(LibrisError::DuplicateMember(fields.number));
        }
        let member = Member::new(fields.first_name, fields.last_name, fields.number);
        let number = member.number;
        self.commit_members(|members| {
            members.push(member);
            Ok(())
        })?;
        tracing::info!(number, "member added");
        Ok(number)
    }

    pub fn modify_member(&mut self, number: i32, update: MemberUpdate) -> Result<Member> {
        let member = self.commit_members(|members| {
            let member = members
                .iter_mut()
                .find(|m| m.number == number)
                .ok_or(LibrisError::MemberNotFound(number))?;
            member.first_name = update.first_name;
            member.last_name = update.last_name;
            Ok(member.clone())
        })?;
        tracing::info!(number, "member modified");
        Ok(member)
    }

    pub fn delete_member(&mut self, number: i32) -> Result<Member> {
        let removed = self.commit_members(|members| {
            let pos = members
                .iter()
                .position(|m| m.number == number)
                .ok_or(LibrisError::MemberNotFound(number))?;
            Ok(members.remove(pos))
        })?;
        tracing::info!(number, "member deleted");
        Ok(removed)
    }

    // --- Loans ---

    /// Lend a book to a member. Both must exist; otherwise nothing changes.
    pub fn lend_book(&mut self, isbn: &str, number: i32) -> Result<LoanReceipt> {
        self.transition(isbn, number, |book| book.lend())
    }

    /// Take a book back from a member. Both must exist; otherwise nothing changes.
    pub fn return_book(&mut self, isbn: &str, number: i32) -> Result<LoanReceipt> {
        self.transition(isbn, number, |book| book.return_loan())
    }

    fn transition(
        &mut self,
        isbn: &str,
        number: i32,
        step: impl FnOnce(&mut dyn Lendable) -> LoanOutcome,
    ) -> Result<LoanReceipt> {
        if self.book(isbn).is_none() {
            return Err(LibrisError::BookNotFound(isbn.to_string()));
        }
        let member = self
            .member(number)
            .cloned()
            .ok_or(LibrisError::MemberNotFound(number))?;

        let (outcome, book) = self.commit_books(|books| {
            let book = find_book_mut(books, isbn)?;
            let lendable: &mut dyn Lendable = &mut *book;
            let outcome = step(lendable);
            Ok((outcome, book.clone()))
        })?;

        Ok(LoanReceipt {
            outcome,
            book,
            member,
        })
    }
}

fn find_book_mut<'a>(books: &'a mut [Book], isbn: &str) -> Result<&'a mut Book> {
    books
        .iter_mut()
        .find(|b| b.isbn() == isbn)
        .ok_or_else(|| LibrisError::BookNotFound(isbn.to_string()))
}

/// Drop records whose key was already seen. The first occurrence wins.
fn dedupe<T>(records: Vec<T>, key: impl Fn(&T) -> String) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    records
        .into_iter()
        .filter(|r| {
            let k = key(r);
            if seen.insert(k.clone()) {
                true
            } else {
                tracing::warn!(key = %k, "duplicate record in storage ignored");
                false
            }
        })
        .collect()
}
