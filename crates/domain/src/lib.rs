//! # salonview-domain
//!
//! Pure domain model for the salonview service catalog.
//!
//! ## Responsibilities
//! - Foundational types: scalar catalog values, load errors
//! - Define **Service records** (one row of the remote catalog) and lenient catalog decoding
//! - Define the **Projection** (search filter + fixed-size page slice)
//! - Define **Pagination controls** (First / Prev / numbered / Next / Last with boundary state)
//! - Define the **Application state** value and its four transitions
//! - Define the **View** a renderer switches over (loading / error / ready)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod scalar;

pub mod pagination;
pub mod projection;
pub mod row;
pub mod service_record;
pub mod state;
pub mod view;
