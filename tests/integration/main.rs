//! Integration tests for robotxt
//!
//! `fetch_tests` drive the HTTP fetcher and client against wiremock servers;
//! `query_tests` exercise the public query API end-to-end on in-memory text.

mod fetch_tests;
mod query_tests;
