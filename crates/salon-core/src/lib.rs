//! Salon Core - inventory search and lead notifications for the Autosalon
//! website backend.
//!
//! This crate has no HTTP layer of its own; `salon-server` exposes it.
//!
//! # Example
//!
//! ```rust
//! use salon_core::{RecordStore, SearchEngine, SearchQuery};
//! use std::sync::Arc;
//!
//! # fn main() -> salon_core::Result<()> {
//! let store = Arc::new(RecordStore::embedded()?);
//! let engine = SearchEngine::new(store);
//!
//! let mut query = SearchQuery {
//!     brand: Some("bmw".into()),
//!     max_price: Some(50_000),
//!     ..Default::default()
//! };
//! salon_core::validate(&mut query).expect("valid query");
//!
//! let page = engine.search(&query);
//! println!("{} of {} vehicles", page.cars.len(), page.total);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod sanitize;
pub mod search;
pub mod store;
pub mod validate;

pub use error::{Result, SalonError};
pub use models::{SearchOptions, SearchQuery, SearchResponse, ValidationError, VehicleRecord};
pub use notify::{FormRequest, HttpMailer, LeadNotifier, LogMailer, MailSettings, Mailer};
pub use search::SearchEngine;
pub use store::RecordStore;
pub use validate::validate;
