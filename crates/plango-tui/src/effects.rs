//! Side effects requested by the reducer.
//!
//! The reducer never calls collaborators itself; it returns these and the
//! runtime hands each one to the `LoginCallbacks` implementation, feeding
//! the resulting action back as `UiEvent::Callback`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Submit passed validation.
    LoginSucceeded { email: String },
    /// "¿Olvidaste tu contraseña?" was activated.
    ForgotPassword,
    /// "Regístrate" was activated.
    Register,
}
