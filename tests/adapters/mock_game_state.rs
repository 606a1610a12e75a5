use runehook::adapters::GameState;

pub struct MockGameState {
    pub player_name: Option<String>,
}

impl MockGameState {
    pub fn logged_in(name: &str) -> Self {
        Self {
            player_name: Some(name.to_string()),
        }
    }

    pub fn logged_out() -> Self {
        Self { player_name: None }
    }
}

impl GameState for MockGameState {
    fn player_name(&self) -> Option<String> {
        self.player_name.clone()
    }
}
