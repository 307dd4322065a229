// -- Lint policy ---------------------------------------------------------
// Clippy groups and restriction lints are set here; rustc lints live in
// Cargo.toml.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Free-fly camera and lesson runner for wgpu rendering tutorials.
//!
//! Freelook owns the parts every tutorial lesson repeats: an Euler-angle
//! camera steered by keyboard, mouse and scroll wheel, the input plumbing
//! that turns window events into camera commands, and a window loop that
//! drives a [`app::Lesson`] frame by frame.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - position/orientation state and its view matrix
//! - [`camera::CameraController`] - applies input to a camera each frame
//! - [`input::InputProcessor`] - window events to [`input::InputCommand`]s
//! - [`options::Options`] - window, camera and keybinding configuration
//! - [`lessons`] - the bundled lessons, looked up by name
//!
//! The camera and input modules have no GPU or windowing dependency and can
//! be driven directly from tests or another event loop.

pub mod app;
pub mod camera;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod lessons;
pub mod options;
pub mod util;

#[cfg(feature = "viewer")]
pub use app::Runner;
pub use app::{FrameContext, Lesson};
pub use camera::{Camera, CameraController, CameraMovement};
pub use error::FreelookError;
pub use options::Options;
