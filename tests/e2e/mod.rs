//! End-to-end tests against real git repositories.


mod deck_flow;
mod gateway;
