use libris::error::LibrisError;
use libris::lending::LoanOutcome;
use libris::store::catalog::{BookFields, BookUpdate, MemberFields, MemberUpdate};
use libris::store::fs_backend::FsBackend;
use libris::store::CatalogStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn open(dir: &Path) -> CatalogStore<FsBackend> {
    let mut store = CatalogStore::with_backend(FsBackend::new(dir.to_path_buf()));
    store.load().unwrap();
    store
}

fn dune() -> BookFields {
    BookFields {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        isbn: "111".to_string(),
        year: 1965,
        pages: 412,
    }
}

fn member_five() -> MemberFields {
    MemberFields {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        number: 5,
    }
}

fn assert_reload_matches(dir: &Path, store: &CatalogStore<FsBackend>) {
    let reloaded = open(dir);
    assert_eq!(reloaded.books(), store.books());
    assert_eq!(reloaded.members(), store.members());
}

#[test]
fn adding_a_book_writes_its_line() {
    let temp = TempDir::new().unwrap();
    let mut store = open(temp.path());

    store.add_book(dune()).unwrap();

    assert_eq!(store.books().len(), 1);
    assert!(!store.books()[0].is_borrowed());
    let text = fs::read_to_string(temp.path().join("books.txt")).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), vec!["Dune|Herbert|111|1965|412|False"]);
}

#[test]
fn lending_twice_keeps_book_borrowed() {
    let temp = TempDir::new().unwrap();
    let mut store = open(temp.path());
    store.add_book(dune()).unwrap();
    store.add_member(member_five()).unwrap();

    let first = store.lend_book("111", 5).unwrap();
    assert_eq!(first.outcome, LoanOutcome::Lent);

    let second = store.lend_book("111", 5).unwrap();
    assert_eq!(second.outcome, LoanOutcome::AlreadyBorrowed);
    assert!(store.book("111").unwrap().is_borrowed());
    assert_reload_matches(temp.path(), &store);
}

#[test]
fn deleting_unknown_isbn_leaves_file_alone() {
    let temp = TempDir::new().unwrap();
    let mut store = open(temp.path());
    store.add_book(dune()).unwrap();
    let before = fs::read_to_string(temp.path().join("books.txt")).unwrap();

    let err = store.delete_book("999").unwrap_err();

    assert!(matches!(err, LibrisError::BookNotFound(_)));
    assert_eq!(store.books().len(), 1);
    let after = fs::read_to_string(temp.path().join("books.txt")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn searching_by_author_finds_the_book() {
    let temp = TempDir::new().unwrap();
    let mut store = open(temp.path());
    store.add_book(dune()).unwrap();
    store
        .add_book(BookFields {
            title: "Foundation".to_string(),
            author: "Asimov".to_string(),
            isbn: "222".to_string(),
            year: 1951,
            pages: 255,
        })
        .unwrap();

    let hits = store.search_books("Herbert");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].isbn(), "111");
}

#[test]
fn every_mutation_is_durable() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    let mut store = open(dir);

    store.add_book(dune()).unwrap();
    assert_reload_matches(dir, &store);

    store.add_member(member_five()).unwrap();
    assert_reload_matches(dir, &store);

    store
        .modify_book(
            "111",
            BookUpdate {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                year: 1965,
                pages: 604,
            },
        )
        .unwrap();
    assert_reload_matches(dir, &store);

    store
        .modify_member(
            5,
            MemberUpdate {
                first_name: "Augusta".to_string(),
                last_name: "King".to_string(),
            },
        )
        .unwrap();
    assert_reload_matches(dir, &store);

    store.lend_book("111", 5).unwrap();
    assert_reload_matches(dir, &store);

    store.return_book("111", 5).unwrap();
    assert_reload_matches(dir, &store);

    store.delete_member(5).unwrap();
    store.delete_book("111").unwrap();
    assert_reload_matches(dir, &store);
    assert!(open(dir).books().is_empty());
}

#[test]
fn lend_with_unknown_member_changes_nothing() {
    let temp = TempDir::new().unwrap();
    let mut store = open(temp.path());
    store.add_book(dune()).unwrap();

    let err = store.lend_book("111", 5).unwrap_err();

    assert!(matches!(err, LibrisError::MemberNotFound(5)));
    assert!(!open(temp.path()).book("111").unwrap().is_borrowed());
}

#[test]
fn hand_written_files_load_in_order() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("books.txt"),
        "Emma|Austen|050|1815|474|False\nDune|Herbert|111|1965|412|True\n",
    )
    .unwrap();
    fs::write(temp.path().join("members.txt"), "Ada|Lovelace|5\n").unwrap();

    let store = open(temp.path());
    let isbns: Vec<&str> = store.books().iter().map(|b| b.isbn()).collect();
    assert_eq!(isbns, vec!["050", "111"]);
    assert!(store.book("111").unwrap().is_borrowed());
    assert_eq!(store.member(5).unwrap().full_name(), "Ada Lovelace");
}

#[test]
fn malformed_file_fails_the_load() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("books.txt"),
        "Dune|Herbert|111|1965|412|False\nbroken line\n",
    )
    .unwrap();

    let mut store = CatalogStore::with_backend(FsBackend::new(temp.path().to_path_buf()));
    match store.load() {
        Err(LibrisError::MalformedRecord {
            kind, line_number, ..
        }) => {
            assert_eq!(kind, "book");
            assert_eq!(line_number, 2);
        }
        other => panic!("expected malformed record, got {:?}", other),
    }
    assert!(store.books().is_empty());
}

#[test]
fn explicit_save_rewrites_both_files() {
    let temp = TempDir::new().unwrap();
    let mut store = open(temp.path());
    store.add_member(member_five()).unwrap();
    fs::remove_file(temp.path().join("members.txt")).unwrap();

    store.save().unwrap();

    assert_eq!(
        fs::read_to_string(temp.path().join("members.txt")).unwrap(),
        "Ada|Lovelace|5\n"
    );
    assert_eq!(fs::read_to_string(temp.path().join("books.txt")).unwrap(), "");
}

#[test]
fn duplicate_stored_keys_are_dropped_on_next_write() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("books.txt"),
        "Dune|Herbert|111|1965|412|False\nCopy|Someone|111|2000|10|True\n",
    )
    .unwrap();
    fs::write(temp.path().join("members.txt"), "Ada|Lovelace|5\nAda|King|5\n").unwrap();

    let mut store = open(temp.path());
    assert_eq!(store.books().len(), 1);
    assert_eq!(store.book("111").unwrap().title(), "Dune");
    assert_eq!(store.member(5).unwrap().last_name, "Lovelace");

    // Files keep the duplicates until a mutation rewrites the collection.
    let books_before = fs::read_to_string(temp.path().join("books.txt")).unwrap();
    assert_eq!(books_before.lines().count(), 2);

    store
        .add_book(BookFields {
            isbn: "222".to_string(),
            ..dune()
        })
        .unwrap();
    assert_eq!(
        fs::read_to_string(temp.path().join("books.txt")).unwrap(),
        "Dune|Herbert|111|1965|412|False\nDune|Herbert|222|1965|412|False\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("members.txt")).unwrap(),
        "Ada|Lovelace|5\nAda|King|5\n"
    );
}
