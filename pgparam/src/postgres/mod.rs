//! Postgres protocol definitions used by parameter encoding.
mod pg_format;

pub use pg_format::PgFormat;
