//! Transition validation - decides whether a requested bump is legal

pub mod rules;
pub mod validator;

pub use rules::{allowed_bumps, RuleId};
pub use validator::{
    evaluate, validate, validate_transition, Approval, BumpRequest, Outcome,
};
