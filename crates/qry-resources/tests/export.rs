//! End-to-end consolidation scenarios against the in-memory and native
//! filesystems.

use qry_fs::{FileSystem, MemoryFileSystem, NativeFileSystem};
use qry_project::{Animation, Object, Project, Resource, ResourceKind, SpriteConfiguration};
use qry_resources::{CopyOptions, ProjectResourcesCopier};

fn base_project() -> Project {
    let mut project = Project::new("/game/base/folder/game.json");
    for (name, file) in [
        ("Image1", "/image1.png"),
        ("Image2", "image2.png"),
        ("Image3", "subfolder/image3.png"),
    ] {
        project
            .resources
            .add(Resource::new(name, ResourceKind::Image, file))
            .unwrap();
    }
    project
}

fn seeded_fs() -> MemoryFileSystem {
    MemoryFileSystem::with_files([
        ("/image1.png", "one"),
        ("/game/base/folder/image2.png", "two"),
        ("/game/base/folder/subfolder/image3.png", "three"),
    ])
}

#[test]
fn flatten_export_copies_every_file_to_the_destination_root() {
    let fs = seeded_fs();
    let mut project = base_project();

    let report = ProjectResourcesCopier::copy_all_resources_to(
        &mut project,
        &fs,
        "/export",
        CopyOptions {
            update_original_project: true,
            preserve_absolute_filenames: false,
            preserve_directories_structure: false,
        },
    )
    .unwrap();

    assert_eq!(report.attempted, 3);
    assert_eq!(report.copied, 3);
    assert!(report.all_succeeded());
    assert_eq!(fs.read_file("/export/image1.png").unwrap(), "one");
    assert_eq!(fs.read_file("/export/image2.png").unwrap(), "two");
    assert_eq!(fs.read_file("/export/image3.png").unwrap(), "three");

    // The live project now points at the flattened names.
    assert_eq!(project.resources.get("Image1").unwrap().file, "image1.png");
    assert_eq!(project.resources.get("Image3").unwrap().file, "image3.png");
}

#[test]
fn structured_export_mirrors_subfolders_and_keeps_foreign_absolutes() {
    let fs = seeded_fs();
    let mut project = base_project();

    let report = ProjectResourcesCopier::copy_all_resources_to(
        &mut project,
        &fs,
        "/export",
        CopyOptions {
            update_original_project: true,
            ..CopyOptions::default()
        },
    )
    .unwrap();

    // Image1 lives on an unrelated root and is preserved as-is: no copy.
    assert_eq!(report.attempted, 2);
    assert_eq!(report.copied, 2);
    assert!(fs.exists("/export/image2.png"));
    assert!(fs.exists("/export/subfolder/image3.png"));
    assert!(!fs.exists("/export/image1.png"));
    assert_eq!(project.resources.get("Image1").unwrap().file, "/image1.png");
    assert_eq!(
        project.resources.get("Image3").unwrap().file,
        "subfolder/image3.png"
    );
}

#[test]
fn export_without_update_leaves_the_project_untouched() {
    let fs = seeded_fs();
    let mut project = base_project();

    ProjectResourcesCopier::copy_all_resources_to(
        &mut project,
        &fs,
        "/export",
        CopyOptions {
            update_original_project: false,
            preserve_absolute_filenames: false,
            preserve_directories_structure: false,
        },
    )
    .unwrap();

    assert!(fs.exists("/export/image3.png"));
    assert_eq!(
        project.resources.get("Image3").unwrap().file,
        "subfolder/image3.png"
    );
}

#[test]
fn one_missing_source_does_not_abort_the_rest() {
    let fs = seeded_fs();
    let mut project = base_project();
    project
        .resources
        .add(Resource::new("Ghost", ResourceKind::Image, "missing.png"))
        .unwrap();

    let report = ProjectResourcesCopier::copy_all_resources_to(
        &mut project,
        &fs,
        "/export",
        CopyOptions {
            update_original_project: true,
            preserve_absolute_filenames: false,
            preserve_directories_structure: false,
        },
    )
    .unwrap();

    assert_eq!(report.attempted, 4);
    assert_eq!(report.copied, 3);
    assert_eq!(
        report.failures,
        vec!["/game/base/folder/missing.png".to_owned()]
    );
    assert!(fs.exists("/export/image2.png"));
}

#[test]
fn duplicate_basenames_from_different_folders_never_collide() {
    let fs = MemoryFileSystem::with_files([
        ("/game/base/folder/a/sprite.png", "from a"),
        ("/game/base/folder/b/sprite.png", "from b"),
    ]);
    let mut project = Project::new("/game/base/folder/game.json");
    project
        .resources
        .add(Resource::new("A", ResourceKind::Image, "a/sprite.png"))
        .unwrap();
    project
        .resources
        .add(Resource::new("B", ResourceKind::Image, "b/sprite.png"))
        .unwrap();

    let report = ProjectResourcesCopier::copy_all_resources_to(
        &mut project,
        &fs,
        "/export",
        CopyOptions {
            update_original_project: true,
            preserve_absolute_filenames: false,
            preserve_directories_structure: false,
        },
    )
    .unwrap();

    assert_eq!(report.copied, 2);
    assert_eq!(fs.read_file("/export/sprite.png").unwrap(), "from a");
    assert_eq!(fs.read_file("/export/sprite.png2").unwrap(), "from b");
}

#[test]
fn object_export_names_files_after_the_object() {
    let fs = MemoryFileSystem::with_files([
        ("/game/base/folder/frames/s1.png", "s1"),
        ("/game/base/folder/frames/s2.png", "s2"),
    ]);
    let mut project = Project::new("/game/base/folder/game.json");
    project
        .resources
        .add(Resource::new("step1", ResourceKind::Image, "frames/s1.png"))
        .unwrap();
    project
        .resources
        .add(Resource::new("step2", ResourceKind::Image, "frames/s2.png"))
        .unwrap();
    project.objects.push(Object::new(
        "Hero",
        "Sprite",
        Box::new(SpriteConfiguration {
            animations: vec![Animation::with_frames(
                "Run",
                ["step1", "step2", "step1", "step2"],
            )],
        }),
    ));

    let report = ProjectResourcesCopier::copy_object_resources_to(
        &project,
        "Hero",
        &fs,
        "/asset",
        "Hero",
    )
    .unwrap();

    assert_eq!(report.copied, 2);
    assert_eq!(fs.read_file("/asset/Hero_Run_0;2.png").unwrap(), "s1");
    assert_eq!(fs.read_file("/asset/Hero_Run_1;3.png").unwrap(), "s2");
    // Scoped export never rewrites the live project.
    assert_eq!(
        project.resources.get("step1").unwrap().file,
        "frames/s1.png"
    );
}

#[test]
fn native_filesystem_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().to_string_lossy().replace('\\', "/");
    let fs = NativeFileSystem::new();

    fs.mk_dir(&format!("{root}/project/subfolder")).unwrap();
    fs.write_file(&format!("{root}/project/hero.png"), "hero")
        .unwrap();
    fs.write_file(&format!("{root}/project/subfolder/tiles.png"), "tiles")
        .unwrap();

    let mut project = Project::new(format!("{root}/project/game.json"));
    project
        .resources
        .add(Resource::new("hero", ResourceKind::Image, "hero.png"))
        .unwrap();
    project
        .resources
        .add(Resource::new(
            "tiles",
            ResourceKind::Image,
            "subfolder/tiles.png",
        ))
        .unwrap();

    let destination = format!("{root}/export");
    let report = ProjectResourcesCopier::copy_all_resources_to(
        &mut project,
        &fs,
        &destination,
        CopyOptions {
            update_original_project: true,
            ..CopyOptions::default()
        },
    )
    .unwrap();

    assert_eq!(report.copied, 2);
    assert_eq!(fs.read_file(&format!("{destination}/hero.png")).unwrap(), "hero");
    assert_eq!(
        fs.read_file(&format!("{destination}/subfolder/tiles.png"))
            .unwrap(),
        "tiles"
    );
}
