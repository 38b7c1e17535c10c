//! Contract types shared by every layer

pub mod case;

pub use case::Case;
