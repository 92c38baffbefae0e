use image::{Rgba, RgbaImage};
use phogo::app::{Mode, Viewport};
use phogo::catalog::OsFileSystem;
use phogo::domain::CatalogItem;
use phogo::{handle_event, initialize, Action, Config, Event};
use std::path::Path;
use std::sync::Arc;

const VIEWPORT: Viewport = Viewport { cols: 80, rows: 24 };

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([200, 40, 40, 255]))
        .save(dir.path().join("a.png"))
        .unwrap();
    RgbaImage::from_pixel(4, 4, Rgba([40, 200, 40, 255]))
        .save(dir.path().join("b.png"))
        .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
    std::fs::create_dir(dir.path().join("trip")).unwrap();
    dir
}

fn start(path: &Path) -> (phogo::Session, Vec<Action>) {
    let config = Config {
        start_path: Some(path.to_path_buf()),
        ..Config::default()
    };
    initialize(&config, Arc::new(OsFileSystem), VIEWPORT)
}

fn names(session: &phogo::Session) -> Vec<&str> {
    session.catalog.items.iter().map(CatalogItem::name).collect()
}

#[test]
fn directory_start_lists_only_images() {
    let dir = fixture();
    let (session, actions) = start(dir.path());

    assert_eq!(session.mode, Mode::Browsing);
    assert!(actions.is_empty());
    assert_eq!(names(&session), vec!["a.png", "b.png"]);
}

#[test]
fn image_start_opens_the_viewer() {
    let dir = fixture();
    let (session, actions) = start(&dir.path().join("b.png"));

    assert_eq!(session.mode, Mode::ViewingImage);
    assert_eq!(session.cursor, 1);
    match actions.as_slice() {
        [Action::RequestRender(request)] => {
            assert!(request.path.ends_with("b.png"));
            assert_eq!(request.seq, session.render.latest_seq);
        }
        other => panic!("unexpected actions: {other:?}"),
    }
}

#[test]
fn non_image_start_stays_in_the_list() {
    let dir = fixture();
    let (session, actions) = start(&dir.path().join("notes.txt"));

    assert_eq!(session.mode, Mode::Browsing);
    assert!(actions.is_empty());
    assert!(session.status.as_deref().is_some_and(|s| s.contains("notes.txt")));
}

#[test]
fn missing_start_directory_is_unreadable() {
    let dir = fixture();
    let (session, _) = start(&dir.path().join("gone"));

    assert!(matches!(session.catalog.items.as_slice(), [CatalogItem::Unreadable { .. }]));
    assert!(session.status.is_some());
}

#[test]
fn delete_and_rename_touch_the_disk() {
    let dir = fixture();
    let (mut session, _) = start(dir.path());

    handle_event(&mut session, &Event::Delete).unwrap();
    assert_eq!(session.mode, Mode::ConfirmingDelete);
    handle_event(&mut session, &Event::Char('y')).unwrap();
    assert!(!dir.path().join("a.png").exists());
    assert_eq!(names(&session), vec!["b.png"]);

    handle_event(&mut session, &Event::Rename).unwrap();
    for _ in 0.."b.png".len() {
        handle_event(&mut session, &Event::Backspace).unwrap();
    }
    for c in "renamed.png".chars() {
        handle_event(&mut session, &Event::Char(c)).unwrap();
    }
    handle_event(&mut session, &Event::Select).unwrap();

    assert!(dir.path().join("renamed.png").exists());
    assert_eq!(names(&session), vec!["renamed.png"]);
    assert_eq!(session.mode, Mode::Browsing);
}

#[test]
fn directory_mode_commits_new_working_dir() {
    let dir = fixture();
    RgbaImage::from_pixel(2, 2, Rgba([0, 0, 255, 255]))
        .save(dir.path().join("trip").join("beach.png"))
        .unwrap();
    let (mut session, _) = start(dir.path());

    handle_event(&mut session, &Event::BrowseDirectories).unwrap();
    assert_eq!(session.mode, Mode::DirectoryBrowsing);
    assert!(session.select_name("trip"));
    handle_event(&mut session, &Event::Select).unwrap();
    handle_event(&mut session, &Event::BrowseDirectories).unwrap();

    assert_eq!(session.mode, Mode::Browsing);
    assert!(session.working_dir.ends_with("trip"));
    assert_eq!(names(&session), vec!["beach.png"]);
}
