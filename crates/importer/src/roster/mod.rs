mod models;
mod parser;
mod validator;

pub use models::{RawRosterRecord, RosterRow};
pub use parser::read_roster;
pub use validator::{RosterValidator, ValidationReport};
