//! LiteSVM tests running the built program through the runtime.
//!
//! Requires `target/deploy/lst_pool.so`:
//!
//! ```text
//! cargo build-sbf
//! cargo test -p lst-pool --features test-sbf --test svm
//! ```

mod accounts;
mod common;
