// Centralized magic numbers & default values
pub const FIELD_COUNT: usize = 7;
pub const FIELD_WIDTH: usize = 4;
pub const RECORD_SIZE: usize = FIELD_COUNT * FIELD_WIDTH;
pub const DEFAULT_OUTPUT: &str = "config.bin";

/// Default hyperparameters: embedding dim, hidden dim, heads, layers,
/// layers, vocab size, max context.
pub const DEFAULT_VALUES: [i32; FIELD_COUNT] = [768, 3072, 12, 12, 12, 50257, 1024];
