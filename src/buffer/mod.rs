pub mod replay;
pub mod singleton;
