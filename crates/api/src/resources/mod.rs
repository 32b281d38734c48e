//! Resource accessors: one module per backend resource, each an
//! `impl ApiClient` block mapping methods to fixed endpoint paths.
//! No client-side payload validation; the calling form owns that.

mod auth;
mod campus_leads;
mod cohorts;
mod events;
mod messages;
mod profile;
mod stats;
