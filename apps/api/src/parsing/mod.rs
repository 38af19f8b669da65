// Heuristic resume text parser: extracted text in, ResumeRecord out.
// Rule-based and line oriented; never fails, degrades to an emptier record.

mod contact;
mod normalize;
mod parser;
mod patterns;
mod sections;

pub mod handlers;

pub use normalize::{strip_bullet, trim_separators};
pub use parser::parse_resume_text;

pub(crate) use contact::with_scheme;
