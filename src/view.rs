//! The window contents: a generate button and the label showing its result.

use std::fmt::{self, Display};

use cushy::figures::units::Lp;
use cushy::value::{Destination, Dynamic, Source};
use cushy::widget::{MakeWidget, WidgetInstance};
use tracing::warn;

use crate::backend::{Backend, GenerateError};
use crate::settings::Settings;

/// The caption of the generate button.
pub const GENERATE_CAPTION: &str = "Generate Password";

/// The label text shown before the first request.
pub const INITIAL_TEXT: &str = "Press \"Generate Password\" to request a password";

/// The result of a single click, as presented to the user.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The backend produced a password.
    Generated(String),
    /// The backend could not be reached.
    ConnectionFailed,
    /// The backend answered with something other than a JSON object.
    InvalidResponse,
}

impl From<Result<String, GenerateError>> for Outcome {
    fn from(result: Result<String, GenerateError>) -> Self {
        match result {
            Ok(password) => Self::Generated(password),
            Err(err) => {
                warn!("password generation failed: {err}");
                if err.is_connection() {
                    Self::ConnectionFailed
                } else {
                    Self::InvalidResponse
                }
            }
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Generated(password) => write!(f, "Generated Password: {password}"),
            Outcome::ConnectionFailed => f.write_str("Error connecting to backend"),
            Outcome::InvalidResponse => f.write_str("Error parsing server response"),
        }
    }
}

/// The password generator's user interface state.
///
/// Cloning a view produces another handle to the same label and busy flag.
#[derive(Debug, Clone)]
pub struct PasswordView {
    settings: Settings,
    label: Dynamic<String>,
    busy: Dynamic<bool>,
}

impl PasswordView {
    /// Returns a new view that requests passwords from the backend in
    /// `settings`.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            label: Dynamic::new(String::from(INITIAL_TEXT)),
            busy: Dynamic::new(false),
        }
    }

    /// The text currently displayed in the label.
    #[must_use]
    pub const fn label(&self) -> &Dynamic<String> {
        &self.label
    }

    /// True while a request started by the button is in flight.
    #[must_use]
    pub const fn busy(&self) -> &Dynamic<bool> {
        &self.busy
    }

    /// Requests a password and displays the outcome, blocking the calling
    /// thread until the backend has answered.
    pub fn generate(&self) -> Outcome {
        let backend = Backend::new(&self.settings);
        let outcome = Outcome::from(backend.generate_password());
        self.label.set(outcome.to_string());
        outcome
    }

    /// Runs [`Self::generate`] on a background thread.
    ///
    /// Does nothing if a request is already in flight. The returned handle
    /// can be joined to wait for the outcome.
    pub fn generate_in_background(&self) -> Option<std::thread::JoinHandle<Outcome>> {
        self.busy.compare_swap(&false, true).ok()?;

        let view = self.clone();
        Some(std::thread::spawn(move || {
            let outcome = view.generate();
            view.busy.set(false);
            outcome
        }))
    }
}

impl MakeWidget for PasswordView {
    fn make_widget(self) -> WidgetInstance {
        let enabled = self.busy.map_each(|busy| !busy);
        let label = self.label.clone();

        GENERATE_CAPTION
            .into_button()
            .on_click(move |_| {
                self.generate_in_background();
            })
            .with_enabled(enabled)
            .into_default()
            .and(label)
            .into_rows()
            .pad()
            .width(Lp::points(300)..)
            .centered()
            .expand()
            .make_widget()
    }
}
