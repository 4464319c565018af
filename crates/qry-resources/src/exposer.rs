//! Project traversal: the one place that knows where resource references
//! live inside a project.
//!
//! Every other component is kind-agnostic and only sees the
//! [`ResourceWorker`] callbacks. Traversal order is unspecified; workers must
//! not depend on it. Traversal is exhaustive: catalogue entries, object
//! configurations, behaviors, object and layer effects, event parameters,
//! external sheets, extension functions and platform asset slots are each
//! visited exactly once per run.

use std::collections::{BTreeSet, VecDeque};

use qry_project::{Event, Layout, Project, ResourceWorker};

/// Visits every resource reference of the whole project.
pub fn expose_whole_project_resources(project: &mut Project, worker: &mut dyn ResourceWorker) {
    expose_project_resources(project, worker);
    for layout in &mut project.layouts {
        expose_layout_owned_resources(layout, worker);
    }
    for external in &mut project.external_events {
        expose_events(&mut external.events, worker);
    }
    expose_extensions(project, worker);
}

/// Visits the project-global references only: the resource catalogue's file
/// paths, the global objects and the platform asset slots.
pub fn expose_project_resources(project: &mut Project, worker: &mut dyn ResourceWorker) {
    for resource in project.resources.iter_mut() {
        worker.expose_file(&mut resource.file);
    }
    for object in &mut project.objects {
        object.expose_resources(worker);
    }
    for asset in &mut project.platform_assets {
        worker.expose_resource(asset.kind, &mut asset.resource_name);
    }
}

/// Visits the references one scene can reach: its objects, layers and event
/// sheet, following link events transitively into external sheets and other
/// layouts' sheets.
///
/// Catalogue file paths and global objects are project scope and not visited
/// here; extension functions are visited unconditionally since nothing ties
/// a function to one scene.
pub fn expose_layout_resources(
    project: &mut Project,
    layout_name: &str,
    worker: &mut dyn ResourceWorker,
) -> Result<(), crate::Error> {
    if !project.has_layout(layout_name) {
        return Err(crate::Error::LayoutNotFound(layout_name.to_owned()));
    }

    if let Some(layout) = project.get_layout_mut(layout_name) {
        for object in &mut layout.objects {
            object.expose_resources(worker);
        }
        for layer in &mut layout.layers {
            for effect in &mut layer.effects {
                effect.expose_resources(worker);
            }
        }
    }

    expose_linked_events(project, layout_name, worker);
    expose_extensions(project, worker);
    Ok(())
}

fn expose_layout_owned_resources(layout: &mut Layout, worker: &mut dyn ResourceWorker) {
    for object in &mut layout.objects {
        object.expose_resources(worker);
    }
    for layer in &mut layout.layers {
        for effect in &mut layer.effects {
            effect.expose_resources(worker);
        }
    }
    // Links are not followed here: their target sheets are visited on their
    // own by the whole-project traversal.
    expose_events(&mut layout.events, worker);
}

fn expose_extensions(project: &mut Project, worker: &mut dyn ResourceWorker) {
    for extension in &mut project.extensions {
        for function in &mut extension.functions {
            expose_events(&mut function.events, worker);
        }
    }
}

/// Visits the resource-typed parameters of an event list, recursing into
/// sub-events. Link events are left to the caller.
fn expose_events(events: &mut [Event], worker: &mut dyn ResourceWorker) {
    let mut sink = Vec::new();
    expose_events_collecting_links(events, worker, &mut sink);
}

fn expose_events_collecting_links(
    events: &mut [Event],
    worker: &mut dyn ResourceWorker,
    links: &mut Vec<String>,
) {
    for event in events {
        match event {
            Event::Standard {
                instructions,
                sub_events,
            } => {
                for instruction in instructions {
                    for parameter in &mut instruction.parameters {
                        if let Some(kind) = parameter.resource_kind {
                            worker.expose_resource(kind, &mut parameter.value);
                        }
                    }
                }
                expose_events_collecting_links(sub_events, worker, links);
            }
            Event::Link { target } => links.push(target.clone()),
        }
    }
}

/// An event sheet reachable from a scene through link events.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Sheet {
    Layout(String),
    External(String),
}

fn expose_linked_events(project: &mut Project, layout_name: &str, worker: &mut dyn ResourceWorker) {
    let mut pending = VecDeque::from([Sheet::Layout(layout_name.to_owned())]);
    let mut visited: BTreeSet<Sheet> = BTreeSet::new();

    while let Some(sheet) = pending.pop_front() {
        if !visited.insert(sheet.clone()) {
            continue;
        }
        let mut links = Vec::new();
        match &sheet {
            Sheet::Layout(name) => {
                if let Some(layout) = project.get_layout_mut(name) {
                    expose_events_collecting_links(&mut layout.events, worker, &mut links);
                }
            }
            Sheet::External(name) => {
                if let Some(external) =
                    project.external_events.iter_mut().find(|e| &e.name == name)
                {
                    expose_events_collecting_links(&mut external.events, worker, &mut links);
                }
            }
        }
        for target in links {
            // A link names either an external sheet or another layout;
            // dangling targets are silently skipped.
            if project.has_external_events(&target) {
                pending.push_back(Sheet::External(target));
            } else if project.has_layout(&target) {
                pending.push_back(Sheet::Layout(target));
            }
        }
    }
}
