// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums, and traits that define the core
// concepts of the preprocessing job.
//
// Rules for this layer:
//   - NO file I/O
//   - NO tokenisation rules
//   - Only plain Rust types, the error taxonomy, and traits
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// One image id and its captions, plus the captions mapping
pub mod caption_record;

// The three dataset splits
pub mod partition;

// Error taxonomy shared by the data and vocab layers
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
