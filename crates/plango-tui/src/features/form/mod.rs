//! Login form feature (state/update/render).

mod render;
mod state;
mod update;

pub use render::{FORM_WIDTH, render_form};
pub use state::{Focus, FormState};
pub use update::{FormIntent, handle_key, handle_paste, toggle_password_visibility};
