pub mod token;
pub mod uploads;
pub mod webutils;
