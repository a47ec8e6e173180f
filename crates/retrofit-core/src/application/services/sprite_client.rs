//! Sprite Client - drives any [`SpriteRenderer`].

use tracing::{debug, instrument};

use crate::{
    application::ports::SpriteRenderer,
    domain::Position,
    error::RetrofitResult,
};

/// One `render_sprite` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteCommand {
    pub name: String,
    pub position: Position,
}

impl SpriteCommand {
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
        }
    }
}

/// Client written purely against the sprite port.
pub struct SpriteClient {
    renderer: Box<dyn SpriteRenderer>,
}

impl SpriteClient {
    /// Create a new client around any sprite renderer.
    pub fn new(renderer: Box<dyn SpriteRenderer>) -> Self {
        Self { renderer }
    }

    /// The fixed demonstration scene.
    pub fn scene() -> Vec<SpriteCommand> {
        vec![
            SpriteCommand::new("player_idle", 10, 20),
            SpriteCommand::new("enemy_attack", 50, 60),
            SpriteCommand::new("coin", 5, 5),
        ]
    }

    /// Render the demonstration scene.
    pub fn run(&self) -> RetrofitResult<()> {
        self.render_all(&Self::scene())
    }

    /// Render `commands` in order, stopping at the first failure.
    #[instrument(skip_all, fields(count = commands.len()))]
    pub fn render_all(&self, commands: &[SpriteCommand]) -> RetrofitResult<()> {
        for cmd in commands {
            debug!(name = %cmd.name, position = %cmd.position, "rendering sprite");
            self.renderer
                .render_sprite(&cmd.name, cmd.position.x, cmd.position.y)?;
        }
        Ok(())
    }
}
