//! HTTP access for remote kegs
//!
//! Index fetching only needs "GET this URL, give me the body", so that is
//! all [`HttpGet`] asks for. [`HttpClient`] is the reqwest implementation;
//! tests and embedders can supply their own.

mod client;

pub use client::HttpClient;

use crate::error::KegError;

pub trait HttpGet {
    /// Body of a successful (2xx) response to a GET of `url`.
    ///
    /// Any other status is [`KegError::FetchFailed`] carrying the status
    /// line, e.g. `"404 Not Found"`.
    fn get(&self, url: &str) -> Result<Vec<u8>, KegError>;
}
