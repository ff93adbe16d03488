mod config;
mod dry_run;
mod report;
mod score_ticket;
mod session;
mod tickets;

pub use config::config;
pub use dry_run::dry_run;
pub use report::report;
pub use score_ticket::score_ticket;
pub use session::session;
pub use tickets::tickets;
