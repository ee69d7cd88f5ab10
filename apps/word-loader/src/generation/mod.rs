// Dictionary entry generation: chunking the word list, prompting the model,
// and turning its reply into validated entries.
// All completion calls go through llm_client.

pub mod chunker;
pub mod generator;
pub mod prompts;

pub use chunker::chunks;
pub use generator::EntryGenerator;
