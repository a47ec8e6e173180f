//! Client code must not care whether it holds an adapter or a native renderer.

use std::sync::Arc;

use retrofit_adapters::{
    LegacyEngine, LegacyMediaAdapter, LegacySpriteAdapter, MemoryTrace, ModernRenderer,
};
use retrofit_core::{
    application::{MediaClient, SpriteClient, SpriteCommand},
    domain::{TraceKind, ValidationPolicy},
};

fn sprite_adapter(trace: &MemoryTrace) -> LegacySpriteAdapter {
    LegacySpriteAdapter::new(LegacyEngine::new(Arc::new(trace.clone())))
}

#[test]
fn sprite_scene_gives_one_render_line_per_call_on_both() {
    let scene_len = SpriteClient::scene().len();

    let adapter_trace = MemoryTrace::new();
    SpriteClient::new(Box::new(sprite_adapter(&adapter_trace)))
        .run()
        .unwrap();

    let modern_trace = MemoryTrace::new();
    SpriteClient::new(Box::new(ModernRenderer::new(Arc::new(modern_trace.clone()))))
        .run()
        .unwrap();

    let adapter_renders = adapter_trace.of_kind(TraceKind::Render);
    let modern_renders = modern_trace.of_kind(TraceKind::Render);
    assert_eq!(adapter_renders.len(), scene_len);
    assert_eq!(modern_renders.len(), scene_len);

    // Same order on both sides.
    for (cmd, (a, m)) in SpriteClient::scene()
        .iter()
        .zip(adapter_renders.iter().zip(&modern_renders))
    {
        assert!(a.detail.contains(&cmd.name), "{a}");
        assert!(m.detail.contains(&cmd.name), "{m}");
    }
}

#[test]
fn adapter_loads_exactly_once_before_each_draw() {
    let trace = MemoryTrace::new();
    SpriteClient::new(Box::new(sprite_adapter(&trace)))
        .render_all(&[SpriteCommand::new("n", 3, 4)])
        .unwrap();

    assert_eq!(
        trace.rendered(),
        vec![
            "[legacy] loadResourceByName: 'n' -> 10 bytes",
            "[legacy] drawImage: 10-byte payload 'n' at (3.0, 4.0)",
        ]
    );
}

#[test]
fn media_scene_matches_on_both() {
    let adapter_trace = MemoryTrace::new();
    MediaClient::new(Box::new(LegacyMediaAdapter::new(LegacyEngine::new(
        Arc::new(adapter_trace.clone()),
    ))))
    .run()
    .unwrap();

    let modern_trace = MemoryTrace::new();
    MediaClient::new(Box::new(ModernRenderer::new(Arc::new(modern_trace.clone()))))
        .run()
        .unwrap();

    assert_eq!(adapter_trace.of_kind(TraceKind::Render).len(), 2);
    assert_eq!(modern_trace.of_kind(TraceKind::Render).len(), 2);
    assert_eq!(adapter_trace.of_kind(TraceKind::Load).len(), 1);
}

#[test]
fn strict_blank_sprite_aborts_the_client() {
    let trace = MemoryTrace::new();
    let err = SpriteClient::new(Box::new(sprite_adapter(&trace)))
        .render_all(&[SpriteCommand::new("coin", 0, 0), SpriteCommand::new("", 1, 1)])
        .unwrap_err();

    assert_eq!(err.to_string(), "invalid argument 'name': must be non-blank");
    // Only the first command made it through.
    assert_eq!(trace.len(), 2);
}

#[test]
fn lenient_blank_sprite_is_skipped_and_the_scene_continues() {
    let trace = MemoryTrace::new();
    let adapter = LegacySpriteAdapter::builder()
        .engine(LegacyEngine::new(Arc::new(trace.clone())))
        .policy(ValidationPolicy::Lenient)
        .build()
        .unwrap();

    SpriteClient::new(Box::new(adapter))
        .render_all(&[SpriteCommand::new(" ", 0, 0), SpriteCommand::new("coin", 1, 1)])
        .unwrap();

    assert_eq!(
        trace.kinds(),
        vec![TraceKind::Diagnostic, TraceKind::Load, TraceKind::Render]
    );
}

#[test]
fn runs_are_deterministic() {
    let run = || {
        let trace = MemoryTrace::new();
        SpriteClient::new(Box::new(sprite_adapter(&trace)))
            .run()
            .unwrap();
        MediaClient::new(Box::new(ModernRenderer::new(Arc::new(trace.clone()))))
            .run()
            .unwrap();
        trace.rendered()
    };
    assert_eq!(run(), run());
}
