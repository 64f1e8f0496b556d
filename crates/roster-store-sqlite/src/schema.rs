//! SQL schema for the Roster SQLite store.

pub const SCHEMA_VERSION: i64 = 1;

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA foreign_keys = ON;

-- Single row, present once a snapshot has been saved.
CREATE TABLE IF NOT EXISTS snapshot (
    id        INTEGER PRIMARY KEY CHECK (id = 1),
    persons   INTEGER NOT NULL,
    ccas      INTEGER NOT NULL
);

-- `position` keeps list order across a round trip.
CREATE TABLE IF NOT EXISTS persons (
    position  INTEGER PRIMARY KEY,
    name      TEXT NOT NULL,
    phone     TEXT NOT NULL,
    email     TEXT NOT NULL,
    address   TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS ccas (
    position  INTEGER PRIMARY KEY,
    name      TEXT NOT NULL UNIQUE
);

-- cca_name is not a foreign key: a dangling name is reported on read.
CREATE TABLE IF NOT EXISTS cca_information (
    person    INTEGER NOT NULL REFERENCES persons(position) ON DELETE CASCADE,
    cca_name  TEXT NOT NULL,
    role      TEXT NOT NULL,
    attended  INTEGER NOT NULL,
    total     INTEGER NOT NULL,
    PRIMARY KEY (person, cca_name)
);
";
