//! Shared configuration types for the LINE Pay client.

mod environment;

pub use environment::{Environment, ParseEnvironmentError};
