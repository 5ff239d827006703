#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Mounts the Dropbin page on wasm32. On host targets the binary only
//! prints a pointer to the wasm build.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    dropbin_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    writeln!(
        io::stderr().lock(),
        "dropbin-ui only runs in a browser; use `trunk serve` or target wasm32-unknown-unknown."
    )?;
    Ok(())
}
