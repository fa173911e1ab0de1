use std::path::PathBuf;

use sources::{FileSource, QuestionSource, SourceError};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quiz-sources-{name}-{}", std::process::id()));
    std::fs::create_dir_all(dir.join("assets")).unwrap();
    dir
}

#[tokio::test]
async fn file_source_reads_web_style_paths_under_root() {
    let root = scratch_dir("read");
    std::fs::write(
        root.join("assets/questions1.json"),
        r#"[{"question":"Capital of France?","options":["Paris","Rome"],"answer":0,"explanation":"Seine"}]"#,
    )
    .unwrap();

    let source = FileSource::new(&root);
    let questions = source.fetch_set("/assets/questions1.json").await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].correct_option(), "Paris");
    assert_eq!(questions[0].explanation(), "Seine");

    std::fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn missing_file_is_not_found_and_bad_json_is_malformed() {
    let root = scratch_dir("errors");
    std::fs::write(root.join("assets/broken.json"), "[{").unwrap();
    let source = FileSource::new(&root);

    let err = source.fetch_set("/assets/nope.json").await.unwrap_err();
    assert!(matches!(err, SourceError::NotFound { .. }));
    assert!(err.is_transport());

    let err = source.fetch_set("/assets/broken.json").await.unwrap_err();
    assert!(matches!(err, SourceError::Malformed { .. }));
    assert_eq!(err.path(), "/assets/broken.json");

    std::fs::remove_dir_all(root).unwrap();
}

#[tokio::test]
async fn bundled_demo_sets_are_valid() {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demo");
    let source = FileSource::new(root);

    let counts = [
        ("/assets/questions1.json", 3),
        ("/assets/questions2.json", 2),
        ("/assets/questions3.json", 2),
    ];
    for (path, expected) in counts {
        let questions = source.fetch_set(path).await.unwrap();
        assert_eq!(questions.len(), expected, "{path}");
    }
}
