mod field;
mod state;

pub use field::{FieldId, FieldState};
pub use state::FormState;
