use crate::resource::ResourceKind;

/// One instruction argument. Arguments referencing a resource carry the kind
/// the surrounding instruction declares for that position; the declaration
/// normally comes from the extension registry, which is outside this model's
/// boundary, so the kind is carried inline.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub resource_kind: Option<ResourceKind>,
    pub value: String,
}

impl Parameter {
    /// A plain argument that never references a resource.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            resource_kind: None,
            value: value.into(),
        }
    }

    /// An argument referencing a resource of the given kind by name.
    pub fn resource(kind: ResourceKind, value: impl Into<String>) -> Self {
        Self {
            resource_kind: Some(kind),
            value: value.into(),
        }
    }
}

/// A condition or action inside an event.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub instruction_type: String,
    pub parameters: Vec<Parameter>,
}

impl Instruction {
    pub fn new(instruction_type: impl Into<String>, parameters: Vec<Parameter>) -> Self {
        Self {
            instruction_type: instruction_type.into(),
            parameters,
        }
    }
}

/// One event of an event sheet.
#[derive(Debug, Clone)]
pub enum Event {
    /// Conditions/actions plus nested sub-events.
    Standard {
        instructions: Vec<Instruction>,
        sub_events: Vec<Event>,
    },
    /// Inclusion of another event sheet (an external events sheet or another
    /// layout's sheet) by name.
    Link { target: String },
}

impl Event {
    pub fn standard(instructions: Vec<Instruction>) -> Self {
        Self::Standard {
            instructions,
            sub_events: Vec::new(),
        }
    }

    pub fn link(target: impl Into<String>) -> Self {
        Self::Link {
            target: target.into(),
        }
    }
}
