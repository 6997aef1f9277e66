//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by default so
//! debug builds stay readable. Every flag is further gated by
//! `cfg(debug_assertions)` at the call site.

pub struct DebugFlags {
    /// Emit a line for every cycle start, step result and completion.
    pub print_cycle_events: bool,
    /// Emit a line whenever a response is dropped because its cycle went stale.
    pub print_stale_discards: bool,
    /// Emit UI interaction logs (price edits, refresh clicks).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_cycle_events: true,
    print_stale_discards: true,
    print_ui_interactions: false,
    print_state_serde: false,
    print_shutdown: false,
};
