//! Contains the domain math shared by the vector generation tools: the exact
//! power reference, the derived input-domain bound and the stimulus/expected
//! pair type
mod domain;
mod pow;
mod vector;

pub use domain::*;
pub use pow::*;
pub use vector::*;
