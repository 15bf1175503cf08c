use particle_sandbox::*;

#[test]
fn partial_json_overrides_only_named_fields() {
    let config: SimulationConfig = serde_json::from_str(
        r#"{ "gravity": 0.25, "collision": { "push_fraction": 0.2 }, "dragged_collision": "ignore" }"#,
    )
    .expect("partial config should parse");

    assert_eq!(config.gravity, 0.25);
    assert_eq!(config.collision.push_fraction, 0.2);
    assert_eq!(config.collision.velocity_exchange, 0.1);
    assert_eq!(config.dragged_collision, DraggedCollision::Ignore);
    assert_eq!(config.drag_coefficient, 0.05);
    assert_eq!(config.spawn, SpawnSettings::default());
    assert!(config.validate().is_ok());
}

#[test]
fn config_round_trips_through_json() {
    let config = SimulationConfig {
        ground_friction_enabled: false,
        max_particles: Some(64),
        frame_budget_ms: Some(16.0),
        ..SimulationConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: SimulationConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn world_rejects_invalid_config() {
    let config = SimulationConfig {
        spawn: SpawnSettings {
            radius: 5.0,
            mass: 0.0,
        },
        ..SimulationConfig::default()
    };
    let err = SandboxWorld::with_config(config, WorldBounds::default())
        .err()
        .expect("zero spawn mass must be rejected");
    assert!(matches!(err, SandboxError::InvalidConfig(_)));
    assert!(err.to_string().contains("spawn.mass"));
}

#[test]
fn snapshots_serialize_for_the_renderer() {
    let mut world = SandboxWorld::default();
    world.spawn_seed();
    let json = serde_json::to_value(world.snapshots()).unwrap();
    assert_eq!(json[0]["radius"], 20.0);
    assert_eq!(json[0]["is_dragging"], false);
}
