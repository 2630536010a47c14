mod cli;
mod parsers;
mod types;


pub use cli::{AttackArgs, BarrageArgs, Command, ReportArgs};
pub use types::{Ordering, RateSchedule, ReportFormat};
