/// An event emitted by the engine during a tick. The host polls `events()`
/// after ticking; the list is cleared when the next tick starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The cumulative score changed. Fired once per actual change, never for
    /// a write of the same value.
    ScoreChanged { score: u32 },
}
