//! In-memory stores behind the people/color HTTP surface.
//! - `people`: ordered, unique-by-id person records.
//! - `colors`: beacon major -> hue mapping, lazily created on first upsert.
//! Each store owns its collection and serializes its own mutations.

pub mod errors;
pub mod people;
pub mod colors;
