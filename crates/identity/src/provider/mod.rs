//! External capabilities consumed by the resolver.
//!
//! - [`EntityRecognizer`]: labels spans of text (organization, person, ...)
//! - [`TextGenerator`]: single request/response text generation
//!
//! Concrete clients live in submodules; fakes are exported for tests and for
//! hosts that want to run the resolver offline.

mod fake;
mod http_ner;
mod llm;
mod traits;

pub use fake::{FakeEntityRecognizer, FakeTextGenerator};
pub use http_ner::HttpEntityRecognizer;
pub use llm::LlmTextGenerator;
pub use traits::{EntityRecognizer, EntitySpan, GenerationRequest, TextGenerator, ORG_LABEL};
