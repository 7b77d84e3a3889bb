pub mod banner;
pub mod render;
pub mod repl;

pub use repl::ReplAdapter;

/// Prints the welcome banner. Call once at startup (after tracing init).
pub fn init_ui() {
    banner::print_welcome();
}
