use crate::lending::{Lendable, LoanState};
use serde::{Deserialize, Serialize};

/// Fields shared by every kind of publication. The ISBN is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationInfo {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
}

impl PublicationInfo {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            year,
        }
    }

    fn summary(&self) -> String {
        format!(
            "{}, Author: {}, ISBN: {}, Year: {}",
            self.title, self.author, self.isbn, self.year
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub info: PublicationInfo,
    pub pages: i32,
    pub loan: LoanState,
}

impl Book {
    /// New books always start out available.
    pub fn new(info: PublicationInfo, pages: i32) -> Self {
        Self {
            info,
            pages,
            loan: LoanState::Available,
        }
    }

    pub fn title(&self) -> &str {
        &self.info.title
    }

    pub fn isbn(&self) -> &str {
        &self.info.isbn
    }

    pub fn is_borrowed(&self) -> bool {
        self.loan.is_borrowed()
    }

    /// Case-sensitive substring match against title, author or ISBN.
    pub fn matches(&self, query: &str) -> bool {
        self.info.title.contains(query)
            || self.info.author.contains(query)
            || self.info.isbn.contains(query)
    }

    pub fn describe(&self) -> String {
        format!(
            "Book: {}, Pages: {}, Status: {}",
            self.info.summary(),
            self.pages,
            self.loan
        )
    }
}

impl Lendable for Book {
    fn loan_state(&self) -> LoanState {
        self.loan
    }

    fn set_loan_state(&mut self, state: LoanState) {
        self.loan = state;
    }

    fn loan_label(&self) -> &str {
        &self.info.isbn
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    pub info: PublicationInfo,
    pub volumes: i32,
}

impl Magazine {
    pub fn new(info: PublicationInfo, volumes: i32) -> Self {
        Self { info, volumes }
    }

    pub fn describe(&self) -> String {
        format!("Magazine: {}, Volumes: {}", self.info.summary(), self.volumes)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dvd {
    pub info: PublicationInfo,
    pub minutes: i32,
}

impl Dvd {
    pub fn new(info: PublicationInfo, minutes: i32) -> Self {
        Self { info, minutes }
    }

    pub fn describe(&self) -> String {
        format!(
            "DVD: {}, Duration: {} minutes",
            self.info.summary(),
            self.minutes
        )
    }
}

/// The closed set of publication kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Publication {
    Book(Book),
    Magazine(Magazine),
    Dvd(Dvd),
}

impl Publication {
    pub fn info(&self) -> &PublicationInfo {
        match self {
            Self::Book(b) => &b.info,
            Self::Magazine(m) => &m.info,
            Self::Dvd(d) => &d.info,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Book(_) => "Book",
            Self::Magazine(_) => "Magazine",
            Self::Dvd(_) => "DVD",
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Book(b) => b.describe(),
            Self::Magazine(m) => m.describe(),
            Self::Dvd(d) => d.describe(),
        }
    }

    /// The lending capability, for kinds that have one.
    pub fn as_lendable_mut(&mut self) -> Option<&mut dyn Lendable> {
        match self {
            Self::Book(b) => Some(b),
            Self::Magazine(_) | Self::Dvd(_) => None,
        }
    }
}

impl From<Book> for Publication {
    fn from(book: Book) -> Self {
        Self::Book(book)
    }
}

impl From<Magazine> for Publication {
    fn from(magazine: Magazine) -> Self {
        Self::Magazine(magazine)
    }
}

impl From<Dvd> for Publication {
    fn from(dvd: Dvd) -> Self {
        Self::Dvd(dvd)
    }
}

/// A library member. The member number is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub first_name: String,
    pub last_name: String,
    pub number: i32,
}

impl Member {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, number: i32) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            number,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn describe(&self) -> String {
        format!(
            "Member: {}, Member number: {}",
            self.full_name(),
            self.number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lending::LoanOutcome;

    fn dune() -> Book {
        Book::new(PublicationInfo::new("Dune", "Herbert", "111", 1965), 412)
    }

    #[test]
    fn book_describe_lists_every_field() {
        assert_eq!(
            dune().describe(),
            "Book: Dune, Author: Herbert, ISBN: 111, Year: 1965, Pages: 412, Status: Available"
        );
    }

    #[test]
    fn magazine_and_dvd_are_tagged() {
        let mag = Magazine::new(PublicationInfo::new("Wired", "Various", "222", 2020), 12);
        let dvd = Dvd::new(PublicationInfo::new("Alien", "Scott", "333", 1979), 117);

        assert_eq!(
            Publication::from(mag).describe(),
            "Magazine: Wired, Author: Various, ISBN: 222, Year: 2020, Volumes: 12"
        );
        assert_eq!(
            Publication::from(dvd).describe(),
            "DVD: Alien, Author: Scott, ISBN: 333, Year: 1979, Duration: 117 minutes"
        );
    }

    #[test]
    fn no_validation_on_fields() {
        let book = Book::new(PublicationInfo::new("", "", "", -5), -1);
        assert_eq!(book.info.year, -5);
        assert_eq!(book.pages, -1);
    }

    #[test]
    fn only_books_are_lendable() {
        let mut book = Publication::from(dune());
        let mut dvd = Publication::from(Dvd::new(
            PublicationInfo::new("Alien", "Scott", "333", 1979),
            117,
        ));

        let lendable = book.as_lendable_mut().unwrap();
        assert_eq!(lendable.lend(), LoanOutcome::Lent);
        assert!(dvd.as_lendable_mut().is_none());

        match book {
            Publication::Book(b) => assert!(b.is_borrowed()),
            _ => panic!("expected a book"),
        }
    }

    #[test]
    fn search_match_is_case_sensitive() {
        let book = dune();
        assert!(book.matches("Herb"));
        assert!(book.matches("11"));
        assert!(!book.matches("herbert"));
    }

    #[test]
    fn member_describe() {
        let member = Member::new("Ada", "Lovelace", 5);
        assert_eq!(member.describe(), "Member: Ada Lovelace, Member number: 5");
    }
}
