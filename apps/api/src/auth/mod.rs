// Simulated accounts: login, registration, logout.
// Transitions live on `Store`; handlers only adapt HTTP to them.

pub mod accounts;
pub mod handlers;
