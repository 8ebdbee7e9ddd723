pub mod contact_form;
pub mod field;
pub mod state;
pub mod validation;

pub use contact_form::{ContactForm, SubmitOutcome};
pub use field::Field;
pub use state::{FormState, SubmittedRecord};
pub use validation::{FieldError, ValidationErrorKind, ValidationErrors};
