// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// batch job (splitting the corpus or building the vocabulary).
//
// Rules for this layer:
//   - No parsing or tokenisation rules here
//   - No argument parsing or printing here (that's Layer 1)
//   - Only workflow coordination, logging and error context
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The train/dev/test split workflow
pub mod segregate_use_case;

// The vocabulary building workflow
pub mod vocab_use_case;
