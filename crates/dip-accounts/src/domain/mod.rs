pub mod address;
pub mod codec;
pub mod constants;
pub mod derivation;
pub mod entities;
pub mod errors;
pub mod instructions;
pub mod tag;

pub use address::*;
pub use codec::*;
pub use constants::*;
pub use derivation::*;
pub use entities::*;
pub use errors::*;
pub use instructions::*;
pub use tag::*;
