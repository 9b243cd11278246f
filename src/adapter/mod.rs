pub mod command;
pub mod coordinator;
pub mod renderer;

pub use command::Command;
pub use coordinator::{spawn_line_reader, spawn_stdin_reader, DashboardCoordinator};
pub use renderer::DashboardView;
