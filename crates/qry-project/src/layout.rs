use crate::events::Event;
use crate::object::{Effect, Object};

/// Rendering layer of a scene, holding visual effects.
#[derive(Clone, Default)]
pub struct Layer {
    pub name: String,
    pub effects: Vec<Effect>,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            effects: Vec::new(),
        }
    }
}

/// A scene: its objects, its layers and its event sheet.
#[derive(Clone)]
pub struct Layout {
    pub name: String,
    pub objects: Vec<Object>,
    pub layers: Vec<Layer>,
    pub events: Vec<Event>,
}

impl Layout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            layers: vec![Layer::new("")],
            events: Vec::new(),
        }
    }

    pub fn get_layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.name == name)
    }
}
