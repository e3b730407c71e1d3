//! The four operations of the library form.
//!
//! Each mode is a plain handler: field values in, render instruction out.
//! Nothing is kept between calls.

use crate::db::{self, Db, Table};
use log::info;
use rusqlite::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    View,
    Add,
    Update,
    Delete,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::View, Mode::Add, Mode::Update, Mode::Delete];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Mode::View => "View Books",
            Mode::Add => "Add Book",
            Mode::Update => "Update Book",
            Mode::Delete => "Delete Book",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Mode::View => "Library Books",
            Mode::Add => "Add a New Book",
            Mode::Update => "Update Book Details",
            Mode::Delete => "Delete a Book",
        }
    }

    /// Labels of the text inputs shown for this mode, in entry order.
    pub fn field_labels(self) -> &'static [&'static str] {
        match self {
            Mode::View => &[],
            Mode::Add => &["Book ID", "Title", "Author"],
            Mode::Update => &["Enter Book ID to Update", "New Title", "New Author"],
            Mode::Delete => &["Enter Book ID to Delete"],
        }
    }

    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Mode::View => None,
            Mode::Add => Some("Book Added Successfully"),
            Mode::Update => Some("Book Updated Successfully"),
            Mode::Delete => Some("Book Deleted Successfully"),
        }
    }
}

/// A submitted form, carrying the raw text the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    View,
    Add {
        book_id: String,
        title: String,
        author: String,
    },
    Update {
        book_id: String,
        title: String,
        author: String,
    },
    Delete {
        book_id: String,
    },
}

impl Request {
    /// Builds the request for `mode` from its fields in `field_labels` order.
    /// Missing fields are treated as empty text.
    pub fn from_fields(mode: Mode, fields: &[String]) -> Self {
        let field = |i: usize| fields.get(i).cloned().unwrap_or_default();
        match mode {
            Mode::View => Request::View,
            Mode::Add => Request::Add {
                book_id: field(0),
                title: field(1),
                author: field(2),
            },
            Mode::Update => Request::Update {
                book_id: field(0),
                title: field(1),
                author: field(2),
            },
            Mode::Delete => Request::Delete { book_id: field(0) },
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Request::View => Mode::View,
            Request::Add { .. } => Mode::Add,
            Request::Update { .. } => Mode::Update,
            Request::Delete { .. } => Mode::Delete,
        }
    }
}

/// What the UI should show after a request completes.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Table(Table),
    Success(&'static str),
}

pub fn handle(db: &Db, request: &Request) -> Result<Response> {
    match request {
        Request::View => return view_books(db).map(Response::Table),
        Request::Add {
            book_id,
            title,
            author,
        } => add_book(db, book_id, title, author)?,
        Request::Update {
            book_id,
            title,
            author,
        } => update_book(db, book_id, title, author)?,
        Request::Delete { book_id } => delete_book(db, book_id)?,
    }
    Ok(Response::Success(
        request.mode().success_message().unwrap_or_default(),
    ))
}

pub fn view_books(db: &Db) -> Result<Table> {
    db.fetch(db::SELECT_ALL_BOOKS)
}

pub fn add_book(db: &Db, book_id: &str, title: &str, author: &str) -> Result<()> {
    db.execute(db::INSERT_BOOK, &[&book_id, &title, &author])?;
    info!("event=book_add module=actions status=ok");
    Ok(())
}

/// Updates are keyed on `book_id`; a key that matches nothing is not an error.
pub fn update_book(db: &Db, book_id: &str, title: &str, author: &str) -> Result<()> {
    let affected = db.execute(db::UPDATE_BOOK, &[&title, &author, &book_id])?;
    info!(
        "event=book_update module=actions status=ok matched={}",
        affected
    );
    Ok(())
}

pub fn delete_book(db: &Db, book_id: &str) -> Result<()> {
    let affected = db.execute(db::DELETE_BOOK, &[&book_id])?;
    info!(
        "event=book_delete module=actions status=ok matched={}",
        affected
    );
    Ok(())
}
