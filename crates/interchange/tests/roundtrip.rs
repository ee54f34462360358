use interchange::{load_document, read_file, save_document, write_file};
use node::{PrototypeRegistry, Shape, ShapeRef};
use scene_graph::Scene;
use sketch_core::Point;

/// Tag, hot points and children, recursively.
#[derive(Debug, PartialEq)]
struct Outline {
    tag: &'static str,
    points: Vec<Point>,
    children: Vec<Outline>,
}

fn outline(shape: &ShapeRef) -> Outline {
    Outline {
        tag: shape.tag(),
        points: shape.hot_points().to_vec(),
        children: shape.children().iter().map(outline).collect(),
    }
}

fn sample_scene() -> std::rc::Rc<Scene> {
    let scene = Scene::new();
    scene.add(Shape::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0)));

    let inner = Shape::group(vec![
        Shape::ellipse(Point::new(1.5, 2.25), Point::new(-3.0, 7.0)),
        Shape::line(Point::new(0.1, 0.2), Point::new(0.3, 0.4)),
    ]);
    let outer = Shape::group(vec![
        Shape::line(Point::new(100.0, 100.0), Point::new(200.0, 150.0)),
        inner,
        Shape::group(Vec::new()),
        Shape::ellipse(Point::new(40.0, 40.0), Point::new(60.0, 80.0)),
    ]);
    scene.add(outer);
    scene.add(Shape::ellipse(Point::new(0.0, 10.0), Point::new(10.0, 0.0)));

    // Selection is not part of the document
    scene.list()[2].set_selected(true);
    scene
}

#[test]
fn nested_groups_survive_a_roundtrip() {
    let original = sample_scene();
    let text = save_document(&original.list());

    let restored = Scene::new();
    let count = load_document(&restored, &text, &PrototypeRegistry::standard()).unwrap();

    assert_eq!(count, 3);
    let before: Vec<_> = original.list().iter().map(outline).collect();
    let after: Vec<_> = restored.list().iter().map(outline).collect();
    assert_eq!(before, after);

    // Identity is not preserved
    assert_ne!(original.list()[0].id(), restored.list()[0].id());
    assert!(restored.selected_objects().is_empty());
}

#[test]
fn group_rows_follow_their_children() {
    let text = save_document(&sample_scene().list());
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(
        rows,
        vec![
            "@LINE 0 0 10 0",
            "@LINE 100 100 200 150",
            "@OVAL 1.5 2.25 -3 7",
            "@LINE 0.1 0.2 0.3 0.4",
            "@COMP 2",
            "@COMP 0",
            "@OVAL 40 40 60 80",
            "@COMP 4",
            "@OVAL 0 10 10 0",
        ]
    );
}

#[test]
fn restored_groups_propagate_changes() {
    let restored = Scene::new();
    load_document(
        &restored,
        "@LINE 0 0 1 1\n@LINE 2 2 3 3\n@COMP 2",
        &PrototypeRegistry::standard(),
    )
    .unwrap();

    let shapes = restored.list();
    let group = &shapes[0];
    let children = group.children();
    let child = &children[1];
    child.translate(Point::new(1.0, 0.0));

    assert_eq!(group.bounding_box().max.x, 4.0);
    assert_eq!(child.listener_count(), 1);
    assert_eq!(group.listener_count(), 1);
}

#[test]
fn files_roundtrip_through_disk() {
    let path = std::env::temp_dir().join(format!("sketch-roundtrip-{}.txt", std::process::id()));
    let text = save_document(&sample_scene().list());

    write_file(&path, &text).unwrap();
    let read_back = read_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(read_back, text);
}
