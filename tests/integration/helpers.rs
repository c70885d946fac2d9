//! Shared test helpers for keg integration tests

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;
use tempfile::TempDir;

/// Test helper: Create an empty keg directory
pub fn create_keg() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Test helper: Create a node directory holding `doc` as its README.md
pub fn write_node(keg: &Path, id: &str, doc: &str) -> PathBuf {
    let dir = keg.join(id);
    fs::create_dir_all(&dir).expect("Failed to create node directory");
    fs::write(dir.join("README.md"), doc).expect("Failed to write README.md");
    dir
}

/// Test helper: A small keg with a zero node and three linked nodes
pub fn create_sample_keg() -> TempDir {
    let keg = create_keg();
    write_node(keg.path(), "0", "# Sorry, planned but not yet available\n");
    write_node(
        keg.path(),
        "1",
        "# Knowledge exchange graphs\n\nIntroduction.\n\n* [Nodes](../2)\n* [Indexes](../3)\n",
    );
    write_node(keg.path(), "2", "# Nodes\n\nA node is a directory.\n");
    write_node(
        keg.path(),
        "3",
        "# Indexes\n\nSee also:\n\n* [Nodes](../2)\n* [Coming soon](../0)\n",
    );
    keg
}

/// Test helper: Serve `requests` canned responses on a local port and
/// return the base URL
pub fn serve(status: &'static str, body: String, requests: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");

    thread::spawn(move || {
        for _ in 0..requests {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}
