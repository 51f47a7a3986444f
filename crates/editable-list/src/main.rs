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
//! Editable list demo wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    editable_list::run_demo();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    write_hint(&mut std::io::stderr().lock())
}

/// Explain how to serve the demo page that registers the element.
#[cfg(not(target_arch = "wasm32"))]
fn write_hint(out: &mut impl std::io::Write) -> Result<(), std::io::Error> {
    writeln!(
        out,
        "<{tag}> runs in the browser only; serve the demo with `trunk serve` from crates/{tag}, \
         or build the library with `cargo build --target wasm32-unknown-unknown`.",
        tag = editable_list::TAG_NAME,
    )
}
