// Composition root for the events bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the key/value backend, record store and roster renderer.
// - Wire them into use case handlers and expose the HTTP and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
