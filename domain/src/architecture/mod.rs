//! The Architecture aggregate: typed model, questionnaire text extraction,
//! and the normalization repair pipeline.

pub mod extract;
pub mod model;
pub mod normalize;

pub use model::{Account, AccountStructure, Architecture, MasterAccount, NetworkArchitecture};
pub use normalize::{NormalizeError, normalize};
