//! The demonstration: wire renderers to clients and run the scenes.
//!
//! For each shape the legacy-backed adapter runs first, then the native
//! renderer runs the identical scene. Errors are not caught here.

use std::sync::Arc;

use retrofit_adapters::{LegacyEngine, LegacyMediaAdapter, LegacySpriteAdapter, ModernRenderer};
use retrofit_core::{
    application::{MediaClient, MediaCommand, SpriteClient, SpriteCommand, ports::TraceSink},
    domain::ValidationPolicy,
};
use tracing::{info, instrument};

use crate::{cli::Shape, error::CliResult};

/// Run the selected shapes against `sink`.
#[instrument(skip(sink))]
pub fn run(shape: Shape, policy: ValidationPolicy, sink: Arc<dyn TraceSink>) -> CliResult<()> {
    if shape.includes_sprites() {
        run_sprites(policy, &sink)?;
    }
    if shape.includes_media() {
        run_media(policy, &sink)?;
    }
    Ok(())
}

fn run_sprites(policy: ValidationPolicy, sink: &Arc<dyn TraceSink>) -> CliResult<()> {
    info!(%policy, "sprites via LegacySpriteAdapter");
    let adapter = LegacySpriteAdapter::builder()
        .engine(LegacyEngine::new(Arc::clone(sink)))
        .policy(policy)
        .build()?;
    let client = SpriteClient::new(Box::new(adapter));
    client.run()?;
    if policy == ValidationPolicy::Lenient {
        client.render_all(&[SpriteCommand::new("", 0, 0)])?;
    }

    info!("sprites via ModernRenderer");
    SpriteClient::new(Box::new(ModernRenderer::new(Arc::clone(sink)))).run()?;
    Ok(())
}

fn run_media(policy: ValidationPolicy, sink: &Arc<dyn TraceSink>) -> CliResult<()> {
    info!(%policy, "media via LegacyMediaAdapter");
    let adapter = LegacyMediaAdapter::builder()
        .engine(LegacyEngine::new(Arc::clone(sink)))
        .policy(policy)
        .build()?;
    let client = MediaClient::new(Box::new(adapter));
    client.run()?;
    if policy == ValidationPolicy::Lenient {
        client.render_all(&[MediaCommand::image("")])?;
    }

    info!("media via ModernRenderer");
    MediaClient::new(Box::new(ModernRenderer::new(Arc::clone(sink)))).run()?;
    Ok(())
}
