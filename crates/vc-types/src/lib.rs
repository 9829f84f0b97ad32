//! # VC Types Crate
//!
//! Wire-format types for the secure voting client. Every struct here mirrors
//! a payload of the voting REST API 1:1 (camelCase JSON on the wire) and
//! carries no behavior beyond small derived helpers.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-crate types are defined here.
//! - **Mirror, don't model**: records match API responses field-for-field;
//!   the server owns the business rules.
//! - **Lenient decoding**: optional fields default instead of failing, since
//!   the backend omits fields freely across endpoints.

pub mod entities;
pub mod principal;
pub mod requests;
pub mod responses;

pub use entities::*;
pub use principal::Principal;
pub use requests::*;
pub use responses::*;
