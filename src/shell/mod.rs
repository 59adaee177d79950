// Composition root for the bookings service.
//
// Responsibilities
// - Read config from environment.
// - Hold the wired use case handlers in the shared application state.
// - Expose the HTTP router and the GraphQL schema to the binary.

pub mod auth;
pub mod config;
pub mod graphql;
pub mod http;
pub mod response;
pub mod state;
