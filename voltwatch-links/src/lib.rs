//! Request resolution and hypermedia links for Voltwatch reports
//!
//! Sits between the HTTP surface and [`voltwatch_core`]: it owns the
//! request-level policy (default granularity, duration caps, base path) and
//! renders Periods as navigable links.
//!
//! ```rust
//! use voltwatch_core::FixedClock;
//! use voltwatch_links::{LinkBuilder, LinkConfig, PeriodRequest};
//!
//! let config = LinkConfig::default();
//! let clock = FixedClock::from_millis(1_573_365_073_269);
//!
//! let request = PeriodRequest::new(Some("month"), Some("2019-02"), None);
//! let period = request.resolve(&config, &clock)?;
//!
//! let links = LinkBuilder::new(&config).links(&period);
//! assert_eq!(links[0].href, "/period/month/201902");
//! assert_eq!(links[0].prompt, "Feb 2019");
//! # Ok::<(), voltwatch_links::LinkError>(())
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod links;
pub mod request;

pub use config::{LinkConfig, DEFAULT_BASE_PATH, DEFAULT_MAX_DURATIONS};
pub use errors::{LinkError, LinkResult};
pub use links::{LinkBuilder, PeriodLink};
pub use request::PeriodRequest;
