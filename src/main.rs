//! Trunk entry point. The browser build calls into the library's `start`;
//! a native build has nothing to run.

fn main() {
    #[cfg(feature = "csr")]
    video_notes::start();
}
