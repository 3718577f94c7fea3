use snipz::codec;
use snipz::error::SnipzError;
use snipz::model::Snippet;
use snipz::store::fs::FileStore;
use snipz::store::DataStore;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

#[test]
fn kernel_version_scenario() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("snippets");

    let mut store = FileStore::open(&root).unwrap();
    assert!(store.list().unwrap().is_empty());

    let (id, path) = store
        .create("Kernel version", &tags(&["linux", "kernel"]))
        .unwrap();
    assert_eq!(path, root.join(format!("{}.txt", id)));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "---\ntitle: Kernel version\ntags:\n- linux\n- kernel\n---\n"
    );

    // an editor appends the body
    let mut content = fs::read_to_string(&path).unwrap();
    content.push_str("uname -r\n");
    fs::write(&path, content).unwrap();

    let reopened = FileStore::open(&root).unwrap();
    let listed = reopened.list().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed[0],
        Snippet::new(id.as_str(), "Kernel version", tags(&["linux", "kernel"])).with_body("uname -r\n")
    );
}

#[test]
fn many_creates_give_distinct_files() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::open(temp.path()).unwrap();

    let ids: HashSet<String> = (0..50)
        .map(|_| store.create("same title", &[]).unwrap().0)
        .collect();
    assert_eq!(ids.len(), 50);
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 50);
    assert_eq!(store.list().unwrap().len(), 50);
}

#[test]
fn deleted_snippet_is_gone_everywhere() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::open(temp.path()).unwrap();
    let (keep, _) = store.create("keep", &[]).unwrap();
    let (gone, path) = store.create("gone", &[]).unwrap();

    store.delete(&gone).unwrap();

    assert!(!path.exists());
    assert!(!store.exists(&gone));
    assert!(matches!(store.read(&gone), Err(SnipzError::NotFound(_))));
    assert!(matches!(store.path_of(&gone), Err(SnipzError::NotFound(_))));
    assert!(matches!(store.delete(&gone), Err(SnipzError::NotFound(_))));
    let ids: Vec<String> = store.list().unwrap().into_iter().map(|s| s.uid).collect();
    assert_eq!(ids, vec![keep]);
}

#[test]
fn hand_written_file_is_listed() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::open(temp.path()).unwrap();
    let snippet = Snippet::new("", "Find big files", tags(&["shell"]))
        .with_body("du -ah . | sort -rh | head -20\n");
    fs::write(
        temp.path().join("by-hand.txt"),
        codec::encode(&snippet).unwrap(),
    )
    .unwrap();

    let read = store.read("by-hand").unwrap();
    assert_eq!(read.uid, "by-hand");
    assert_eq!(read.title(), "Find big files");
    assert_eq!(read.body, snippet.body);
}

#[test]
fn broken_file_stops_listing() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::open(temp.path()).unwrap();
    store.create("fine", &[]).unwrap();
    fs::write(temp.path().join("broken.txt"), "just text, no front matter\n").unwrap();

    match store.list() {
        Err(SnipzError::MalformedData { context, .. }) => assert!(context.contains("broken")),
        other => panic!("expected malformed data, got {:?}", other),
    }
}
