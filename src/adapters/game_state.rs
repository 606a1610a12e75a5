/// Interface to the current game session.
///
/// The dispatcher uses this to default a notification's player name when the
/// producing listener did not set one.
pub trait GameState: Send + Sync {
    /// Name of the logged-in player, if any.
    fn player_name(&self) -> Option<String>;
}
