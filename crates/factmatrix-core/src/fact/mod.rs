//! The fact data model: quadruples, content hashes, confidence, and the
//! per-fact stake record.

pub mod confidence;
pub mod hash;
pub mod quad;
pub mod record;

pub use confidence::Confidence;
pub use hash::{create_fact_hash, FactHash};
pub use quad::FactQuad;
pub use record::Fact;
