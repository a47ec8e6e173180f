//! Media Client - drives any [`MediaRenderer`].

use tracing::{debug, instrument};

use crate::{application::ports::MediaRenderer, error::RetrofitResult};

/// One call on the media port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCommand {
    Image(String),
    Text(String),
}

impl MediaCommand {
    pub fn image(path: impl Into<String>) -> Self {
        Self::Image(path.into())
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}

/// Client written purely against the media port.
pub struct MediaClient {
    renderer: Box<dyn MediaRenderer>,
}

impl MediaClient {
    /// Create a new client around any media renderer.
    pub fn new(renderer: Box<dyn MediaRenderer>) -> Self {
        Self { renderer }
    }

    /// The fixed demonstration scene.
    pub fn scene() -> Vec<MediaCommand> {
        vec![
            MediaCommand::image("assets/background.png"),
            MediaCommand::text("Score: 100"),
        ]
    }

    /// Render the demonstration scene.
    pub fn run(&self) -> RetrofitResult<()> {
        self.render_all(&Self::scene())
    }

    /// Render `commands` in order, stopping at the first failure.
    #[instrument(skip_all, fields(count = commands.len()))]
    pub fn render_all(&self, commands: &[MediaCommand]) -> RetrofitResult<()> {
        for cmd in commands {
            debug!(?cmd, "rendering media");
            match cmd {
                MediaCommand::Image(path) => self.renderer.render_image(path)?,
                MediaCommand::Text(content) => self.renderer.render_text(content)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::application::ports::render::MockMediaRenderer;
    use crate::domain::Requirement;
    use crate::error::RetrofitError;

    #[test]
    fn run_renders_image_then_text() {
        let mut renderer = MockMediaRenderer::new();
        let mut seq = Sequence::new();
        renderer
            .expect_render_image()
            .with(eq("assets/background.png"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        renderer
            .expect_render_text()
            .with(eq("Score: 100"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        MediaClient::new(Box::new(renderer)).run().unwrap();
    }

    #[test]
    fn text_error_propagates_unchanged() {
        let mut renderer = MockMediaRenderer::new();
        renderer.expect_render_image().never();
        renderer
            .expect_render_text()
            .times(1)
            .returning(|_| Err(RetrofitError::invalid_argument("content", Requirement::NonBlank)));

        let err = MediaClient::new(Box::new(renderer))
            .render_all(&[MediaCommand::text(""), MediaCommand::image("a.png")])
            .unwrap_err();
        assert_eq!(
            err,
            RetrofitError::invalid_argument("content", Requirement::NonBlank)
        );
    }
}
