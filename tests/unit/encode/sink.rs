use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("unit-scratch")
        .join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn file_sink_creates_dir_and_overwrites() {
    let dir = scratch("file_sink_overwrite");
    let sink = FileSink::create(&dir).unwrap();
    assert_eq!(sink.dir(), dir.as_path());

    let first = sink.persist("cultist.webp", &[1, 2, 3]).unwrap();
    assert_eq!(first.location, dir.join("cultist.webp"));
    assert_eq!(first.size_bytes, 3);

    let second = sink.persist("cultist.webp", &[9; 10]).unwrap();
    assert_eq!(second.size_bytes, 10);
    assert_eq!(std::fs::read(&second.location).unwrap(), vec![9; 10]);

    // No temp files left behind.
    let names: Vec<String> = std::fs::read_dir(&dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["cultist.webp".to_owned()]);
}

#[test]
fn file_sink_rejects_nested_names() {
    let sink = FileSink::create(scratch("file_sink_nested")).unwrap();
    let err = sink.persist("../escape.webp", &[0]).unwrap_err();
    assert!(err.to_string().contains("bare file name"));
}

#[test]
fn missing_directory_is_an_io_error() {
    let sink = FileSink::new(scratch("file_sink_missing").join("absent"));
    let err = sink.persist("a.png", &[0]).unwrap_err();
    assert_eq!(err.kind(), crate::foundation::error::FailureKind::Io);
}

#[test]
fn in_memory_sink_records_bytes() {
    let sink = InMemorySink::new();
    let info = sink.persist("b.webp", &[0; 42]).unwrap();
    assert_eq!(info.size_bytes, 42);
    sink.persist("a.webp", &[1]).unwrap();
    assert_eq!(sink.names(), vec!["a.webp".to_owned(), "b.webp".to_owned()]);
    assert_eq!(sink.get("a.webp"), Some(vec![1]));
    assert_eq!(sink.get("c.webp"), None);
}
