//! Headless widgets.
//!
//! Each widget exposes its state as `weave_core` signals and its user events
//! as event sources, so screens wire them with combinators and the host (a
//! real toolkit, the demo shell, or a test) drives them.

pub mod alert;
pub mod button;
pub mod label;
pub mod text_field;

pub use alert::{ActionStyle, Alert, AlertAction, AlertPresenter};
pub use button::Button;
pub use label::Label;
pub use text_field::TextField;
