//! Concrete national holiday calendars.

/// Italian national holidays.
pub mod italy;
