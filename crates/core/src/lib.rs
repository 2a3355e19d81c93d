//! Core library for scamlens
//!
//! This crate implements the **Functional Core** of the scamlens application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! Everything here is a pure transformation: prompt construction, model-reply
//! normalization, upload filename classification, UTF-8 decoding, and URL
//! format validation. No I/O, no clocks, no external state -- the `scamlens`
//! binary crate (the Imperative Shell) owns the web server, the file bytes,
//! and the calls to the generative model.
//!
//! # Module Organization
//!
//! - [`prompt`]: the two fixed instruction templates sent to the model
//! - [`reply`]: normalization of the model's free-text replies for display
//! - [`upload`]: uploaded-file kind detection and text decoding
//! - [`url`]: URL format validation for the URL-classification flow
//! - [`view`]: the page view model handed to the template renderer
//!
//! Each module carries fixture-based unit tests; nothing in this crate
//! requires mocking to test.

pub mod prompt;
pub mod reply;
pub mod upload;
pub mod url;
pub mod view;
