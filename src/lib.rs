// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-fly 3D camera: yaw/pitch orientation, WASD movement, and view
//! matrix construction on top of `glam`.
//!
//! The crate never opens windows or touches the GPU. A host feeds it
//! platform-agnostic input and takes back matrices.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - orientation state, movement, and the view matrix
//! - [`camera::CameraController`] - applies commands and per-frame movement
//! - [`input::InputProcessor`] - turns raw window events into commands
//! - [`options::Options`] - TOML-backed starting pose, limits, and bindings
//!
//! # Frame loop
//!
//! ```
//! use flycam::camera::CameraController;
//! use flycam::input::{InputEvent, InputProcessor};
//! use flycam::util::FrameTiming;
//!
//! let mut controller = CameraController::new();
//! let mut input = InputProcessor::new();
//! let mut timing = FrameTiming::default();
//!
//! for event in [
//!     InputEvent::CursorMoved { x: 400.0, y: 300.0 },
//!     InputEvent::CursorMoved { x: 420.0, y: 290.0 },
//!     InputEvent::Key { code: "KeyW".into(), pressed: true },
//! ] {
//!     if let Some(cmd) = input.handle_event(event) {
//!         assert!(controller.execute(&cmd));
//!     }
//! }
//!
//! let _ = controller.update(timing.tick(), input.movement());
//! let uniform = controller.refresh_uniform();
//! assert_eq!(uniform.as_bytes().len(), 160);
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraCommand, CameraController};
pub use error::FlycamError;
pub use options::Options;
