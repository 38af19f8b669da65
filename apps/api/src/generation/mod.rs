// Template-based resume generation.
// Implements: profession template lookup, career-level voice, job description
// keyword scan, deterministic resume synthesis. No network or model calls.

pub mod generator;
pub mod handlers;
pub mod job_description;
pub mod templates;
pub mod tone;
