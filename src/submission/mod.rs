//! Submission of validated forms
//!
//! The controller drives one form through validation and delivery; the sink is
//! where delivered payloads go.

mod controller;
mod payload;
mod sink;

pub use controller::{FormSnapshot, SubmissionController, SubmitOutcome};
pub use payload::{
    ContactMessage, PartySize, Payload, PayloadKind, Receipt, ReservationRequest, ServiceTime,
    PARTY_SIZE_LABELS, SERVICE_TIME_LABELS,
};
pub use sink::{StubSink, SubmissionSink, DEFAULT_LATENCY};

#[cfg(test)]
pub use sink::MockSubmissionSink;
