//! External command-line tools. Always invoked with an argument vector, never a shell.

pub mod rovenchat_send;
pub mod tailscale;

pub use rovenchat_send::RovenchatSender;
pub use tailscale::TailscaleResolver;
