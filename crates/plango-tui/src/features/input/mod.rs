//! Text input for the form fields.

mod line_buffer;

pub use line_buffer::LineBuffer;
