use librarydb::actions::{self, Mode, Request, Response};
use librarydb::db::{Db, Value};
use rusqlite::Connection;
use tempfile::TempDir;

fn setup_library(schema: &str) -> (TempDir, Db) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("LibraryDB.sql");
    Connection::open(&path).unwrap().execute_batch(schema).unwrap();
    (dir, Db::new(path))
}

fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn view(db: &Db) -> Vec<Vec<String>> {
    match actions::handle(db, &Request::View).unwrap() {
        Response::Table(table) => table.display_rows(),
        other => panic!("expected table, got {:?}", other),
    }
}

#[test]
fn add_update_delete_through_form_requests() {
    let (_dir, db) = setup_library("CREATE TABLE Books (BookID TEXT, Title TEXT, Author TEXT)");

    let add = Request::from_fields(Mode::Add, &fields(&["B1", "Dune", "Herbert"]));
    assert_eq!(
        actions::handle(&db, &add).unwrap(),
        Response::Success("Book Added Successfully")
    );
    assert_eq!(view(&db), vec![fields(&["B1", "Dune", "Herbert"])]);

    let update = Request::from_fields(Mode::Update, &fields(&["B1", "Dune Messiah", "Herbert"]));
    actions::handle(&db, &update).unwrap();
    assert_eq!(view(&db), vec![fields(&["B1", "Dune Messiah", "Herbert"])]);

    let delete = Request::from_fields(Mode::Delete, &fields(&["B1"]));
    actions::handle(&db, &delete).unwrap();
    assert!(view(&db).is_empty());
}

#[test]
fn integer_keys_follow_column_affinity() {
    let (_dir, db) = setup_library(
        "CREATE TABLE Books (BookID INTEGER PRIMARY KEY, Title TEXT NOT NULL, Author TEXT)",
    );
    actions::add_book(&db, "42", "Emma", "Austen").unwrap();

    let table = actions::view_books(&db).unwrap();
    assert_eq!(table.rows[0][0], Value::Integer(42));

    actions::update_book(&db, "42", "Persuasion", "Austen").unwrap();
    assert_eq!(view(&db), vec![fields(&["42", "Persuasion", "Austen"])]);
}

#[test]
fn schema_constraints_surface_as_errors() {
    let (_dir, db) = setup_library(
        "CREATE TABLE Books (BookID TEXT PRIMARY KEY, Title TEXT NOT NULL, Author TEXT)",
    );
    actions::add_book(&db, "B1", "Dune", "Herbert").unwrap();

    let duplicate = Request::from_fields(Mode::Add, &fields(&["B1", "Other", "Someone"]));
    let err = actions::handle(&db, &duplicate).unwrap_err();
    assert!(err.to_string().contains("UNIQUE"));

    assert_eq!(view(&db), vec![fields(&["B1", "Dune", "Herbert"])]);
}

#[test]
fn each_action_reopens_the_file() {
    let (dir, db) = setup_library("CREATE TABLE Books (BookID TEXT, Title TEXT, Author TEXT)");
    actions::add_book(&db, "B1", "Dune", "Herbert").unwrap();

    // A second handle on the same file sees committed writes immediately.
    let other = Db::new(dir.path().join("LibraryDB.sql"));
    assert_eq!(view(&other), vec![fields(&["B1", "Dune", "Herbert"])]);
    assert_eq!(other.path(), db.path());
}
