use anyhow::Result;
use glott_config::{ConfigurationStore, FeatureSchema, FieldValue, PipelineConfig};

#[test]
fn test_default_config_matches_pipeline_literals() {
    let config = PipelineConfig::default();

    assert_eq!(config.sampling_frequency, 48000);
    assert_eq!(config.warping_lambda, 0.42);
    assert!(!config.use_external_gci);
    assert!(config.run.make_dirs);
    assert!(config.run.do_reaper_pitch_analysis);
    assert!(!config.run.do_dnn_training);
    assert_eq!(config.dnn_data.dnn_name, "nancy48_legacy_same");
    assert_eq!(config.dnn_train.n_hidden, vec![250, 250, 250]);
    assert_eq!(config.dnn_train.max_epochs, 20000);
}

#[test]
fn test_default_config_is_valid() -> Result<()> {
    let config = PipelineConfig::default();
    config.validate()?;
    Ok(())
}

#[test]
fn test_derived_paths_are_exact_concatenations() {
    let config = PipelineConfig::default();

    assert_eq!(config.paths.prjdir, "/opt/glott");
    assert_eq!(config.paths.datadir, "/opt/glott/data/slt48");
    assert_eq!(config.paths.analysis, "/opt/glott/src/Analysis");
    assert_eq!(config.paths.synthesis, "/opt/glott/src/Synthesis");
    assert_eq!(config.paths.config_default, "/opt/glott/config/config_48_2.cfg");
    assert_eq!(
        config.paths.train_data_dir,
        "/opt/glott/nndata/traindata/nancy48_legacy_same"
    );
    assert_eq!(
        config.paths.weights_data_dir,
        "/opt/glott/nndata/weights/nancy48_legacy_same"
    );
}

#[test]
fn test_loading_twice_is_deterministic() -> Result<()> {
    let a = ConfigurationStore::load()?;
    let b = ConfigurationStore::load()?;
    assert_eq!(a.config(), b.config());
    Ok(())
}

#[test]
fn test_get_returns_typed_values() -> Result<()> {
    let store = ConfigurationStore::load()?;

    assert_eq!(
        store.get("inputs")?,
        FieldValue::StrList(vec![
            "f0".to_string(),
            "gain".to_string(),
            "hnr".to_string(),
            "lsfg".to_string(),
            "lsf".to_string(),
        ])
    );
    assert_eq!(store.get("sampling_frequency")?, FieldValue::UInt(48000));
    assert_eq!(store.get("warping_lambda")?, FieldValue::Float(0.42));
    assert_eq!(store.get("remove_unvoiced_frames")?, FieldValue::Bool(true));
    assert_eq!(
        store.get("Analysis")?,
        FieldValue::Str("/opt/glott/src/Analysis".to_string())
    );
    assert_eq!(
        store.get("input_dims")?,
        FieldValue::UIntList(vec![1, 1, 25, 10, 50])
    );
    assert_eq!(store.get("train_set")?, FieldValue::UIntList(vec![1]));
    Ok(())
}

#[test]
fn test_get_unknown_field_fails() -> Result<()> {
    let store = ConfigurationStore::load()?;
    let err = store.get("nonexistent").unwrap_err();
    assert!(err.to_string().contains("unknown configuration field"));
    assert!(err.to_string().contains("nonexistent"));
    Ok(())
}

#[test]
fn test_invalid_warping_lambda() {
    let mut config = PipelineConfig::default();
    config.warping_lambda = 1.0; // Invalid (range is half-open)

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("warping_lambda"));

    config.warping_lambda = -0.1; // Invalid
    assert!(config.validate().is_err());
}

#[test]
fn test_valid_warping_lambda_boundary() -> Result<()> {
    let mut config = PipelineConfig::default();
    config.warping_lambda = 0.0; // Valid minimum
    config.validate()?;
    Ok(())
}

#[test]
fn test_invalid_feature_alignment() {
    let mut config = PipelineConfig::default();
    config.features.input_exts.pop();

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("input feature arrays"));

    let mut config = PipelineConfig::default();
    config.features.output_dims = vec![600, 600];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("output feature arrays"));
}

#[test]
fn test_invalid_scalar_ranges() {
    let cases: Vec<(&str, Box<dyn Fn(&mut PipelineConfig)>)> = vec![
        ("sampling_frequency", Box::new(|c| c.sampling_frequency = 0)),
        (
            "data_buffer_size",
            Box::new(|c| c.dnn_data.data_buffer_size = 0),
        ),
        ("batch_size", Box::new(|c| c.dnn_train.batch_size = 0)),
        ("max_epochs", Box::new(|c| c.dnn_train.max_epochs = 0)),
        (
            "learning_rate",
            Box::new(|c| c.dnn_train.learning_rate = 0.0),
        ),
        ("n_hidden", Box::new(|c| c.dnn_train.n_hidden = vec![250, 0])),
        ("dnn_name", Box::new(|c| c.dnn_data.dnn_name.clear())),
        ("prjdir", Box::new(|c| c.paths.prjdir.clear())),
    ];

    for (field, break_it) in cases {
        let mut config = PipelineConfig::default();
        break_it(&mut config);
        let err = config
            .validate()
            .expect_err(&format!("zero/empty {field} must be rejected"));
        assert!(
            err.to_string().contains(field),
            "error for {field} should name the field, got: {err}"
        );
    }
}

#[test]
fn test_overlapping_sets_are_tolerated() -> Result<()> {
    let mut config = PipelineConfig::default();
    config.dnn_data.train_set = vec![1];
    config.dnn_data.val_set = vec![1];
    config.dnn_data.test_set = vec![1];

    // Warned, not fatal: the original pipeline smoke-tests this way.
    config.validate()?;
    Ok(())
}

#[test]
fn test_partial_json_overrides_only_named_groups() -> Result<()> {
    let json = r#"{
        "paths": { "prjdir": "/srv/glott" },
        "dnn_data": { "dnn_name": "slt48_test" },
        "warping_lambda": 0.0
    }"#;
    let config = PipelineConfig::from_json_str(json)?;

    // Named fields override…
    assert_eq!(config.paths.prjdir, "/srv/glott");
    assert_eq!(config.warping_lambda, 0.0);

    // …derived paths follow the overrides…
    assert_eq!(config.paths.analysis, "/srv/glott/src/Analysis");
    assert_eq!(
        config.paths.train_data_dir,
        "/srv/glott/nndata/traindata/slt48_test"
    );

    // …and untouched groups keep the default literals.
    assert_eq!(config.sampling_frequency, 48000);
    assert_eq!(config.features, FeatureSchema::default());
    assert_eq!(config.dnn_data.data_buffer_size, 1000);
    Ok(())
}

#[test]
fn test_json_cannot_override_derived_paths() -> Result<()> {
    let json = r#"{
        "paths": { "prjdir": "/srv/glott", "datadir": "/tmp/elsewhere" }
    }"#;
    let config = PipelineConfig::from_json_str(json)?;

    // Derived fields are recomputed from prjdir regardless of the document.
    assert_eq!(config.paths.datadir, "/srv/glott/data/slt48");
    Ok(())
}

#[test]
fn test_invalid_json_document_fails_on_load() {
    let err = PipelineConfig::from_json_str("{ not json }").unwrap_err();
    assert!(err.to_string().contains("malformed configuration document"));

    // Well-formed JSON that violates an invariant is also rejected.
    let err = PipelineConfig::from_json_str(r#"{ "warping_lambda": 2.0 }"#).unwrap_err();
    assert!(err.to_string().contains("warping_lambda"));
}

#[test]
fn test_save_and_reload_json() -> Result<()> {
    let mut config = PipelineConfig::default();
    config.paths.prjdir = "/srv/glott".to_string();
    config.resolve_derived();

    let path = std::env::temp_dir().join("glott_config_roundtrip.json");
    config.save_json(&path)?;
    let reloaded = ConfigurationStore::load_json(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(reloaded.config(), &config);
    assert_eq!(
        reloaded.get("Synthesis")?,
        FieldValue::Str("/srv/glott/src/Synthesis".to_string())
    );
    Ok(())
}

#[test]
fn test_feature_dim_totals() {
    let config = PipelineConfig::default();
    assert_eq!(config.features.input_dim_total(), 87);
    assert_eq!(config.features.output_dim_total(), 1200);
}
