//! Partial update resolution.
//!
//! Update payloads carry one `Patch<T>` per field:
//! - `None`: the field was absent, keep the stored value
//! - `Some(None)`: the field was an explicit `null`, clear it
//! - `Some(Some(v))`: replace the stored value with `v`
//!
//! Resolution is pure; callers persist the resolved record as a full replace.

pub mod patch_format;
mod resolver;

pub use resolver::{
    resolve_nullable, resolve_required, resolve_required_text, resolve_text, Patch,
    PartialUpdate,
};
