use std::any::Any;
use std::collections::BTreeMap;

use crate::resource::ResourceKind;
use crate::worker::ResourceWorker;

/// Kind-specific payload of an object.
///
/// An object kind enumerates the resources it holds itself; the traversal
/// only asks it to expose them to a worker. `as_any` allows policies that
/// special-case one configuration kind (asset export does, for sprites) to
/// downcast without widening this trait.
pub trait ObjectConfiguration {
    fn expose_resources(&mut self, worker: &mut dyn ResourceWorker);

    fn clone_dyn(&self) -> Box<dyn ObjectConfiguration>;

    fn as_any(&self) -> &dyn Any;
}

impl Clone for Box<dyn ObjectConfiguration> {
    fn clone(&self) -> Self {
        self.clone_dyn()
    }
}

/// One animation frame, pointing at an image resource by name.
#[derive(Debug, Clone, Default)]
pub struct Sprite {
    pub image_name: String,
}

impl Sprite {
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
        }
    }
}

/// One facing direction of an animation.
#[derive(Debug, Clone, Default)]
pub struct Direction {
    pub sprites: Vec<Sprite>,
}

#[derive(Debug, Clone, Default)]
pub struct Animation {
    pub name: String,
    pub directions: Vec<Direction>,
}

impl Animation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directions: Vec::new(),
        }
    }

    /// Convenience for the common single-direction case.
    pub fn with_frames(
        name: impl Into<String>,
        image_names: impl IntoIterator<Item = &'static str>,
    ) -> Self {
        Self {
            name: name.into(),
            directions: vec![Direction {
                sprites: image_names.into_iter().map(Sprite::new).collect(),
            }],
        }
    }
}

/// Sprite object: a list of animations, each a list of directions, each a
/// list of frames referencing image resources.
#[derive(Debug, Clone, Default)]
pub struct SpriteConfiguration {
    pub animations: Vec<Animation>,
}

impl ObjectConfiguration for SpriteConfiguration {
    fn expose_resources(&mut self, worker: &mut dyn ResourceWorker) {
        for animation in &mut self.animations {
            for direction in &mut animation.directions {
                for sprite in &mut direction.sprites {
                    worker.expose_image(&mut sprite.image_name);
                }
            }
        }
    }

    fn clone_dyn(&self) -> Box<dyn ObjectConfiguration> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Catch-all configuration holding kind-tagged references, standing in for
/// object kinds whose resources are plain typed slots (tilemaps, 3D models,
/// particle textures, …).
#[derive(Debug, Clone, Default)]
pub struct GenericConfiguration {
    pub references: Vec<(ResourceKind, String)>,
}

impl GenericConfiguration {
    pub fn with_references(
        references: impl IntoIterator<Item = (ResourceKind, &'static str)>,
    ) -> Self {
        Self {
            references: references
                .into_iter()
                .map(|(kind, name)| (kind, name.to_owned()))
                .collect(),
        }
    }
}

impl ObjectConfiguration for GenericConfiguration {
    fn expose_resources(&mut self, worker: &mut dyn ResourceWorker) {
        for (kind, name) in &mut self.references {
            worker.expose_resource(*kind, name);
        }
    }

    fn clone_dyn(&self) -> Box<dyn ObjectConfiguration> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Behavior attached to an object, with kind-tagged resource properties.
#[derive(Debug, Clone)]
pub struct Behavior {
    pub name: String,
    pub behavior_type: String,
    pub references: Vec<(ResourceKind, String)>,
}

/// Visual effect with named parameters, a declared subset of which reference
/// image resources (textures).
#[derive(Debug, Clone, Default)]
pub struct Effect {
    pub name: String,
    pub effect_type: String,
    pub parameters: BTreeMap<String, String>,
    /// Parameter names whose values are resource references.
    pub resource_parameters: Vec<String>,
}

impl Effect {
    pub fn expose_resources(&mut self, worker: &mut dyn ResourceWorker) {
        for parameter in &self.resource_parameters {
            if let Some(value) = self.parameters.get_mut(parameter) {
                worker.expose_image(value);
            }
        }
    }
}

/// A named object: a polymorphic configuration plus behaviors and effects.
#[derive(Clone)]
pub struct Object {
    pub name: String,
    pub object_type: String,
    pub configuration: Box<dyn ObjectConfiguration>,
    pub behaviors: Vec<Behavior>,
    pub effects: Vec<Effect>,
}

impl Object {
    pub fn new(
        name: impl Into<String>,
        object_type: impl Into<String>,
        configuration: Box<dyn ObjectConfiguration>,
    ) -> Self {
        Self {
            name: name.into(),
            object_type: object_type.into(),
            configuration,
            behaviors: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Exposes every resource reference this object holds: its
    /// configuration's, its behaviors' and its effects'.
    pub fn expose_resources(&mut self, worker: &mut dyn ResourceWorker) {
        self.configuration.expose_resources(worker);
        for behavior in &mut self.behaviors {
            for (kind, name) in &mut behavior.references {
                worker.expose_resource(*kind, name);
            }
        }
        for effect in &mut self.effects {
            effect.expose_resources(worker);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Collector {
        seen: Vec<(ResourceKind, String)>,
    }

    impl ResourceWorker for Collector {
        fn expose_resource_of_kind(&mut self, kind: ResourceKind, name: &mut String) {
            self.seen.push((kind, name.clone()));
        }
    }

    #[test]
    fn sprite_configuration_exposes_every_frame() {
        let mut config = SpriteConfiguration {
            animations: vec![
                Animation::with_frames("Run", ["f1", "f2"]),
                Animation::with_frames("Idle", ["f1"]),
            ],
        };
        let mut worker = Collector::default();
        config.expose_resources(&mut worker);
        let names: Vec<&str> = worker.seen.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, vec!["f1", "f2", "f1"]);
        assert!(worker.seen.iter().all(|(k, _)| *k == ResourceKind::Image));
    }

    #[test]
    fn object_exposes_behavior_and_effect_references() {
        let mut object = Object::new(
            "MyObject",
            "Sprite",
            Box::new(SpriteConfiguration::default()),
        );
        object.behaviors.push(Behavior {
            name: "Tiles".to_owned(),
            behavior_type: "Tilemap::Behavior".to_owned(),
            references: vec![(ResourceKind::Tilemap, "level1".to_owned())],
        });
        let mut effect = Effect {
            name: "Glow".to_owned(),
            effect_type: "Effects::Glow".to_owned(),
            ..Effect::default()
        };
        effect
            .parameters
            .insert("texture".to_owned(), "glowTex".to_owned());
        effect
            .parameters
            .insert("intensity".to_owned(), "0.5".to_owned());
        effect.resource_parameters.push("texture".to_owned());
        object.effects.push(effect);

        let mut worker = Collector::default();
        object.expose_resources(&mut worker);
        assert_eq!(
            worker.seen,
            vec![
                (ResourceKind::Tilemap, "level1".to_owned()),
                (ResourceKind::Image, "glowTex".to_owned()),
            ]
        );
    }

    #[test]
    fn boxed_configurations_deep_clone() {
        let object = Object::new(
            "MyObject",
            "Sprite",
            Box::new(SpriteConfiguration {
                animations: vec![Animation::with_frames("", ["f1"])],
            }),
        );
        let mut copy = object.clone();
        let sprite = copy
            .configuration
            .as_any()
            .downcast_ref::<SpriteConfiguration>()
            .unwrap();
        assert_eq!(sprite.animations[0].directions[0].sprites[0].image_name, "f1");

        // Mutating the copy must not leak into the original.
        struct Eraser;
        impl ResourceWorker for Eraser {
            fn expose_resource_of_kind(&mut self, _kind: ResourceKind, name: &mut String) {
                name.clear();
            }
        }
        copy.expose_resources(&mut Eraser);
        let original = object
            .configuration
            .as_any()
            .downcast_ref::<SpriteConfiguration>()
            .unwrap();
        assert_eq!(original.animations[0].directions[0].sprites[0].image_name, "f1");
    }
}
