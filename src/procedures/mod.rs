//! Procedures for deciding entailment.
//!
//! For the most part these are free functions over [structures](crate::structures), composed by the [knowledge base](crate::knowledge_base).

pub mod model_check;
pub mod normalize;
pub mod resolution;
