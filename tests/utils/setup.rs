use axum::Router;

use fantasy_cricket::{build_router, AppState, EventBus};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub event_bus: EventBus,
    /// Ids of players created by the builder, two per country
    pub players: Vec<String>,
}

pub struct TestSetupBuilder {
    player_count: usize,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { player_count: 0 }
    }

    /// Seeds `count` players, two from each country
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn with_full_squad(self) -> Self {
        self.with_players(20)
    }

    pub async fn build(self) -> TestSetup {
        let event_bus = EventBus::new(64);
        let state = AppState::in_memory(event_bus.clone());

        let mut setup = TestSetup {
            app: build_router(state),
            event_bus,
            players: Vec::new(),
        };

        for i in 0..self.player_count {
            let id = setup
                .create_player(&format!("Player {i}"), &format!("Country {}", i / 2))
                .await;
            setup.players.push(id);
        }

        setup
    }
}
