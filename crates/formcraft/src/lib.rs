// formcraft - schema-driven forms
// Declarative field schemas validated and rendered into live HTML controls

pub mod error;
pub mod schema;
pub mod styling;
pub mod value;

// Engine modules
pub mod config;
pub mod render;
pub mod session;
pub mod validation;

// Re-export core types
pub use error::{SchemaError, SessionError};
pub use schema::{FieldType, FormField, FormSchema, SchemaWarning, ValidationRules};
pub use styling::{defaults_for, ResolvedStyle, Styling};
pub use value::FieldValue;

// Re-export engine types
pub use config::FormcraftConfig;
pub use render::{render_field, render_field_fragment, render_form, Control};
pub use session::{FormSession, SessionState, Submission, SubmissionResult};
pub use validation::{validate, FieldError, PatternPolicy, Validator, ValidatorOptions, ViolationKind};

// Re-export Maud so hosts can embed rendered forms in their own templates
pub use maud::{html as maud, Markup, PreEscaped, Render};
