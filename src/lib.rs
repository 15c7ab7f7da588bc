//! A desktop front-end that asks a local backend for a generated password.
//!
//! The window holds a single button and a label. Pressing the button POSTs a
//! fixed request to the backend and shows either the returned password or a
//! short error message.
#![warn(clippy::pedantic, missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod backend;
mod logging;
pub mod settings;
pub mod view;

use cushy::widget::MakeWidget;
use cushy::Run;

pub use self::backend::{extract_password, Backend, GenerateError};
pub use self::logging::initialize_tracing;
pub use self::settings::Settings;
pub use self::view::{Outcome, PasswordView};

/// The title of the application window.
pub const WINDOW_TITLE: &str = "Vocal Password";

/// Opens the password generator window and runs until it is closed.
pub fn run(settings: Settings) -> cushy::Result {
    PasswordView::new(settings)
        .into_window()
        .titled(WINDOW_TITLE)
        .run()
}
