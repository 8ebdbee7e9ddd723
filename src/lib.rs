pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod output;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod view;
pub mod widgets;

pub use error::{Error, Result};
pub use form::{ContactForm, Field, FormState, SubmitOutcome, SubmittedRecord};
pub use view::{Role, View, ViewNode};
