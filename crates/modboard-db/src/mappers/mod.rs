//! Model to entity mappers
//!
//! Conversions from database rows (`*Model`) to domain objects (modboard-core).

mod channel;
mod config_change;
mod guild;
mod infraction;
mod user;
