//! Pure utility core for the Attune feedback SDK.
//!
//! Everything here is a synchronous value-in/value-out function with no
//! shared state: version ordering (feature-rollout gating), profile
//! snapshot diffing (sync only the changed fields), and the formatting
//! and randomness helpers the identifier and debug layers lean on. Safe
//! to call from any thread.

mod diff;
mod encode;
mod random;
mod table;
mod timestamp;
mod version;

pub use diff::{diff_profiles, FieldChange, ProfileDiff};
pub use encode::{decode_padded_base64, pad_base64};
pub use random::{random_string, secure_random_bytes, EntropyError};
pub use table::{format_table, TableError};
pub use timestamp::{format_timestamp, now_string};
pub use version::{
    compare_versions, is_equal, is_greater, is_less, parse_components, Component,
};
