// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence that doesn't belong in any
// single business layer:
//
//   vocab_store.rs — Saves a built Vocabulary as JSON and
//                    loads it back, so a training run uses
//                    exactly the ids the preprocessing job
//                    assigned.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Vocabulary saving and loading
pub mod vocab_store;
