//! Reconciliation engine between the active-mode service and the SAS.
//!
//! Given a snapshot of every managed CBSD (desired state plus last-known
//! actual state), this crate decides which SAS protocol requests or local
//! cleanups move each device toward its desired state, and delivers them:
//!
//! - **[`generate_messages`]**: pure, deterministic rule engine. Nine
//!   ordered rules per CBSD cover deletion, (de)registration, grant
//!   maintenance, grant requests and spectrum inquiry.
//!
//! - **[`filter()`]** / **[`filter_actions`]**: drop requests whose
//!   serialized body is already pending for the device.
//!
//! - **[`Action`]**: closed set of outputs. [`Action::send`] routes each one
//!   to a [`RequestSink`] or [`RegistrySink`] obtained from a [`SinkProvider`].
//!
//! - **[`Reconciler`]**: fetch → generate → filter → dispatch, once via
//!   [`Reconciler::reconcile_once`] or periodically via [`Reconciler::run`].
//!
//! - **Domain model** ([`model`]): typed CBSDs, grants, channels and power
//!   envelopes converted from the `amc-api` wire types.

pub mod action;
pub mod config;
pub mod convert;
pub mod dispatch;
pub mod eirp;
pub mod error;
pub mod filter;
pub mod generator;
pub mod model;
pub mod reconciler;
pub mod sas;
pub mod sink;
pub mod status;

// ── Primary re-exports ──────────────────────────────────────────────
pub use action::{Action, SendOutcome};
pub use config::{GeneratorConfig, ReconcilerConfig};
pub use dispatch::{DispatchFailure, DispatchReport, dispatch_all};
pub use eirp::FULL_BAND;
pub use error::CoreError;
pub use filter::{filter, filter_actions};
pub use generator::{generate_for_config, generate_messages, matching_rule};
pub use reconciler::{PassSummary, Reconciler};
pub use sas::{Request, RequestKind};
pub use sink::{RegistrySink, RequestSink, ServiceSinks, SinkProvider, StateSource};
pub use status::{CbsdStatus, status_report};

pub use model::{
    ActiveModeConfig, Cbsd, CbsdState, Channel, EirpCapabilities, FrequencyRange, Grant,
    GrantState, State,
};
