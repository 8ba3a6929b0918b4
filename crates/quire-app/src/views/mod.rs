//! Layouts and routes. Each variant of [`crate::Route`] renders one of these.

mod app_shell;
pub use app_shell::AppShell;

mod home;
pub use home::Home;

mod create_post;
pub use create_post::CreatePost;
