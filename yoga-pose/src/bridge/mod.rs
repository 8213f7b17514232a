//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] types live here.
//! Re-exports only in mod.rs, logic in submodules.

mod session;

pub use session::{JsClassification, PoseSession};
