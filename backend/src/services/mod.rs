pub mod events;
pub mod submissions;
