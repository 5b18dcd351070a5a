//! Application layer of the Widgets dashboard.
//!
//! Turns user actions into store transitions and renders the dashboard view
//! after each one.

pub mod action;
pub mod session;
pub mod usecase;
pub mod view;

pub use action::{ActionOutcome, DashboardAction, Notice, NoticeLevel};
pub use session::{SessionHandle, SessionRegistry};
pub use usecase::{IMPORT_SUCCESS_MESSAGE, RenderPass, WidgetsUseCase, apply_action};
pub use view::DashboardView;
